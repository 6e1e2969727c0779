mod entities;
mod segment;
mod text;

pub use entities::{EntityExtractor, DEFAULT_EXPERIENCE_LIMIT, DEFAULT_SKILL_VOCABULARY};
#[cfg(feature = "segmentation")]
pub use segment::SentenceSegmenter;
pub use segment::{default_segmenter, LineSegmenter, Segmenter};
pub use text::{ExtractError, ExtractResult, TextExtractor};
