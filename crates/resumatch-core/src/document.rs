use serde::{Deserialize, Serialize};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentFormat {
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" | "text" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/msword" => Some(Self::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "text/plain" | "text/markdown" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Magic-byte sniffing. A DOCX file is a ZIP archive, so the ZIP
    /// local-file header is treated as DOCX.
    #[must_use]
    pub fn sniff(content: &[u8]) -> Option<Self> {
        if content.starts_with(b"%PDF") {
            Some(Self::Pdf)
        } else if content.starts_with(b"PK") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// A document handed to the pipeline: either a filesystem path or an
/// in-memory buffer, plus an optional extension hint. Hints are lower-cased
/// on construction.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Path {
        path: PathBuf,
        ext_hint: Option<String>,
    },
    Bytes {
        data: Vec<u8>,
        filename: Option<String>,
        ext_hint: Option<String>,
    },
}

impl DocumentSource {
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path {
            path: path.into(),
            ext_hint: None,
        }
    }

    #[must_use]
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::Bytes {
            data,
            filename: None,
            ext_hint: None,
        }
    }

    #[must_use]
    pub fn bytes_named(data: Vec<u8>, filename: impl Into<String>) -> Self {
        Self::Bytes {
            data,
            filename: Some(filename.into()),
            ext_hint: None,
        }
    }

    /// Build a source from any seekable reader (an upload stream, a spooled
    /// temporary file). The reader is rewound to the start before reading,
    /// so a previously consumed handle is safe to pass.
    pub fn from_reader<R: Read + Seek>(
        reader: &mut R,
        filename: Option<&str>,
    ) -> std::io::Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::Bytes {
            data,
            filename: filename.map(str::to_string),
            ext_hint: None,
        })
    }

    #[must_use]
    pub fn with_extension_hint(mut self, ext: &str) -> Self {
        let hint = Some(ext.trim_start_matches('.').to_lowercase());
        match &mut self {
            Self::Path { ext_hint, .. } | Self::Bytes { ext_hint, .. } => *ext_hint = hint,
        }
        self
    }

    #[must_use]
    pub fn ext_hint(&self) -> Option<&str> {
        match self {
            Self::Path { ext_hint, .. } | Self::Bytes { ext_hint, .. } => ext_hint.as_deref(),
        }
    }

    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Path { path, .. } => path.file_name().and_then(|n| n.to_str()),
            Self::Bytes { filename, .. } => filename.as_deref(),
        }
    }

    /// Resolve the effective format: explicit hint, then filename suffix,
    /// then content sniffing, then `Unknown`. An unrecognized hint or suffix
    /// falls through to the next step.
    #[must_use]
    pub fn resolve_format(&self, content: &[u8]) -> DocumentFormat {
        if let Some(format) = self.ext_hint().and_then(DocumentFormat::from_extension) {
            return format;
        }

        let suffix = self
            .filename()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str());
        if let Some(format) = suffix.and_then(DocumentFormat::from_extension) {
            return format;
        }

        DocumentFormat::sniff(content).unwrap_or(DocumentFormat::Unknown)
    }
}
