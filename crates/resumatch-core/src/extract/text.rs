use std::borrow::Cow;
use thiserror::Error;

use crate::capability::Capabilities;
use crate::document::{DocumentFormat, DocumentSource};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("capability unavailable: {0}")]
    MissingCapability(&'static str),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Converts a raw document into plain text. Format-specific readers are
/// capability-gated; every failure degrades to an empty string at the public
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor {
    caps: Capabilities,
}

impl TextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            caps: Capabilities::get(),
        }
    }

    /// Total extraction: any failure (missing capability, corrupt file,
    /// unreadable path) returns `""` with a warning, never an error.
    #[must_use]
    pub fn extract(&self, source: &DocumentSource) -> String {
        match self.try_extract(source) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("text extraction degraded to empty: {e}");
                String::new()
            }
        }
    }

    /// Fallible variant for callers that need the failure reason.
    pub fn try_extract(&self, source: &DocumentSource) -> ExtractResult<String> {
        let content: Cow<'_, [u8]> = match source {
            DocumentSource::Path { path, .. } => Cow::Owned(std::fs::read(path)?),
            DocumentSource::Bytes { data, .. } => Cow::Borrowed(data.as_slice()),
        };

        match source.resolve_format(&content) {
            DocumentFormat::Pdf => self.read_pdf(&content),
            DocumentFormat::Doc | DocumentFormat::Docx => self.read_docx(&content),
            DocumentFormat::PlainText | DocumentFormat::Unknown => Ok(read_plain(&content)),
        }
    }

    fn read_pdf(&self, content: &[u8]) -> ExtractResult<String> {
        if !self.caps.pdf_reader {
            return Err(ExtractError::MissingCapability("pdf reader"));
        }
        read_pdf_pages(content)
    }

    fn read_docx(&self, content: &[u8]) -> ExtractResult<String> {
        if !self.caps.docx_reader {
            return Err(ExtractError::MissingCapability("docx reader"));
        }
        read_docx_paragraphs(content)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Page-by-page extraction; image-only pages yield no text and are skipped
/// rather than treated as errors.
#[cfg(feature = "pdf")]
fn read_pdf_pages(content: &[u8]) -> ExtractResult<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(content)
        .map_err(|e| ExtractError::Pdf(format!("{e:?}")))?;

    let text = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(text)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf_pages(_content: &[u8]) -> ExtractResult<String> {
    Err(ExtractError::MissingCapability("pdf reader"))
}

/// Paragraph text in document order, joined with newlines. Empty paragraphs
/// (section breaks, blank lines) are skipped.
#[cfg(feature = "docx")]
fn read_docx_paragraphs(content: &[u8]) -> ExtractResult<String> {
    let docx = docx_rs::read_docx(content).map_err(|e| ExtractError::Docx(format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(paragraph);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(not(feature = "docx"))]
fn read_docx_paragraphs(_content: &[u8]) -> ExtractResult<String> {
    Err(ExtractError::MissingCapability("docx reader"))
}

// Paragraph -> Run -> Text is the path through the docx tree. Runs within a
// paragraph are parts of the same sentence, so they concatenate without a
// separator.
#[cfg(feature = "docx")]
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    parts.push(text.text.clone());
                }
            }
        }
    }
    parts.concat()
}

fn read_plain(content: &[u8]) -> String {
    String::from_utf8_lossy(content).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_path() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Rust developer since 2015").unwrap();

        let text = TextExtractor::new().extract(&DocumentSource::path(file.path()));
        assert_eq!(text, "Rust developer since 2015");
    }

    #[test]
    fn test_unknown_bytes_decode_lossily() {
        let source = DocumentSource::bytes(vec![b'o', b'k', 0xFF, b'!']);
        let text = TextExtractor::new().extract(&source);
        assert_eq!(text, "ok\u{FFFD}!");
    }

    #[test]
    fn test_missing_path_degrades_to_empty() {
        let source = DocumentSource::path("/definitely/not/here.txt");
        assert_eq!(TextExtractor::new().extract(&source), "");
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_corrupt_pdf_degrades_to_empty() {
        // Sniffed as PDF via the magic prefix, then fails to parse.
        let source = DocumentSource::bytes(b"%PDF-1.7 not actually a pdf".to_vec());
        assert_eq!(TextExtractor::new().extract(&source), "");
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_pdf_path_without_reader_degrades_to_empty() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.7 payload").unwrap();

        let source = DocumentSource::path(file.path());
        let extractor = TextExtractor::new();
        assert_eq!(extractor.extract(&source), "");
        assert!(matches!(
            extractor.try_extract(&source),
            Err(ExtractError::MissingCapability("pdf reader"))
        ));
    }

    #[cfg(not(feature = "docx"))]
    #[test]
    fn test_docx_without_reader_degrades_to_empty() {
        let source = DocumentSource::bytes(b"PK\x03\x04".to_vec());
        assert_eq!(TextExtractor::new().extract(&source), "");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_corrupt_docx_degrades_to_empty() {
        // ZIP magic without a real archive behind it.
        let source = DocumentSource::bytes(b"PK\x03\x04 not an archive".to_vec());
        assert_eq!(TextExtractor::new().extract(&source), "");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_paragraphs_join_with_newlines() {
        use docx_rs::{Docx, Paragraph, Run};

        let mut buf = Vec::new();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Worked at Acme")))
            .add_paragraph(Paragraph::new())
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("BSc, State University")))
            .build()
            .pack(std::io::Cursor::new(&mut buf))
            .unwrap();

        let text = TextExtractor::new().extract(&DocumentSource::bytes_named(buf, "cv.docx"));
        assert_eq!(text, "Worked at Acme\nBSc, State University");
    }
}
