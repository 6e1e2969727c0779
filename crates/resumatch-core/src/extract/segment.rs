use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "segmentation")]
use crate::capability::Capabilities;

/// Splits raw text into the candidate segments the entity heuristics scan.
pub trait Segmenter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Trimmed, non-empty segments in text order.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Unicode sentence boundaries (UAX #29).
#[cfg(feature = "segmentation")]
pub struct SentenceSegmenter;

#[cfg(feature = "segmentation")]
impl Segmenter for SentenceSegmenter {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        use unicode_segmentation::UnicodeSegmentation;

        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\r?\n)+").unwrap());

/// Newline-run splitting. The always-available fallback path; a complete
/// strategy of its own, not a stub.
pub struct LineSegmenter;

impl Segmenter for LineSegmenter {
    fn name(&self) -> &'static str {
        "line"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        NEWLINE_RUN
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Selects the segmentation strategy from the process-wide capability probe.
/// The choice is made where the extractor is constructed and reused for its
/// lifetime, never re-evaluated per call.
#[must_use]
pub fn default_segmenter() -> Box<dyn Segmenter> {
    #[cfg(feature = "segmentation")]
    {
        if Capabilities::get().sentence_segmenter {
            return Box::new(SentenceSegmenter);
        }
    }
    Box::new(LineSegmenter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "segmentation")]
    #[test]
    fn test_sentence_segmenter_splits_on_sentence_bounds() {
        let segments =
            SentenceSegmenter.segment("I worked at Acme. Then I moved on. Final sentence.");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], "I worked at Acme.");
    }

    #[test]
    fn test_line_segmenter_collapses_newline_runs() {
        let segments = LineSegmenter.segment("first line\n\n\nsecond line\r\nthird line\n");
        assert_eq!(segments, ["first line", "second line", "third line"]);
    }

    #[test]
    fn test_line_segmenter_trims_and_drops_blanks() {
        let segments = LineSegmenter.segment("  padded  \n   \n\n");
        assert_eq!(segments, ["padded"]);
    }

    #[test]
    fn test_empty_text_yields_no_segments() {
        assert!(LineSegmenter.segment("").is_empty());
        #[cfg(feature = "segmentation")]
        assert!(SentenceSegmenter.segment("").is_empty());
    }

    #[test]
    fn test_default_segmenter_matches_capability() {
        let segmenter = default_segmenter();
        if cfg!(feature = "segmentation") {
            assert_eq!(segmenter.name(), "sentence");
        } else {
            assert_eq!(segmenter.name(), "line");
        }
    }
}
