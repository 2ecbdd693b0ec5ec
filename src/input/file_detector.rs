//! Résumé file type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Doc,
    Docx,
    Text,
    Unknown,
}

/// Extensions accepted for upload.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

impl ResumeFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => ResumeFormat::Pdf,
            "doc" => ResumeFormat::Doc,
            "docx" => ResumeFormat::Docx,
            "txt" => ResumeFormat::Text,
            _ => ResumeFormat::Unknown,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Doc => "application/msword",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ResumeFormat::Text => "text/plain",
            ResumeFormat::Unknown => "application/octet-stream",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ResumeFormat::Unknown)
    }
}
