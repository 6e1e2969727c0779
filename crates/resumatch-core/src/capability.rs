use std::sync::OnceLock;

/// Process-wide availability of the optional document readers and the
/// sentence segmenter. Extraction code branches on these flags (or on a
/// strategy selected from them at construction), never on per-call probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub pdf_reader: bool,
    pub docx_reader: bool,
    pub sentence_segmenter: bool,
}

impl Capabilities {
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            pdf_reader: cfg!(feature = "pdf"),
            docx_reader: cfg!(feature = "docx"),
            sentence_segmenter: cfg!(feature = "segmentation"),
        }
    }

    /// Memoized probe. Each missing capability is logged once per process;
    /// absence is permanent and never re-checked.
    pub fn get() -> Self {
        static PROBE: OnceLock<Capabilities> = OnceLock::new();
        *PROBE.get_or_init(|| {
            let caps = Self::detect();
            if !caps.pdf_reader {
                tracing::warn!("pdf reader unavailable; PDF extraction degrades to empty text");
            }
            if !caps.docx_reader {
                tracing::warn!("docx reader unavailable; DOC/DOCX extraction degrades to empty text");
            }
            if !caps.sentence_segmenter {
                tracing::warn!("sentence segmenter unavailable; falling back to line heuristics");
            }
            caps
        })
    }
}
