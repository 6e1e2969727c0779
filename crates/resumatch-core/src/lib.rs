pub mod capability;
pub mod document;
pub mod extract;
pub mod pipeline;
pub mod score;
pub mod skills;

pub use capability::Capabilities;
pub use document::{DocumentFormat, DocumentSource};
pub use extract::{EntityExtractor, ExtractError, ExtractResult, TextExtractor};
pub use pipeline::{ParseOutput, ParseStats, ResumePipeline, ResumeProfile};
pub use score::{calculate_match_score, SkillName, SkillsInput};
pub use skills::SkillSet;
