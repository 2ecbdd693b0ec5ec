//! Error handling for the skill verifier

use crate::normalize::NormalizationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillVerifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillVerifierError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillVerifierError {
    fn from(err: anyhow::Error) -> Self {
        SkillVerifierError::AnalysisFailed(err.to_string())
    }
}

impl From<askama::Error> for SkillVerifierError {
    fn from(err: askama::Error) -> Self {
        SkillVerifierError::OutputFormatting(err.to_string())
    }
}

impl SkillVerifierError {
    /// Message suitable for showing to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            SkillVerifierError::Normalization(e) => e.user_message().to_string(),
            SkillVerifierError::Backend { message, .. } => format!("Error: {}", message),
            other => other.to_string(),
        }
    }
}
