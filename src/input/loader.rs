//! Loading a résumé from disk for upload

use crate::error::{Result, SkillVerifierError};
use crate::input::file_detector::{ResumeFormat, SUPPORTED_EXTENSIONS};
use log::info;
use std::path::Path;
use tokio::fs;

/// A résumé file read into memory, ready for the multipart upload.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub format: ResumeFormat,
    pub bytes: Vec<u8>,
}

pub fn detect_format(path: &Path) -> Result<ResumeFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| SkillVerifierError::InvalidInput(
            format!("File has no extension: {}", path.display())
        ))?;

    let format = ResumeFormat::from_extension(extension);
    if !format.is_supported() {
        return Err(SkillVerifierError::UnsupportedFormat(format!(
            "Unsupported file extension: .{}. Allowed: {}",
            extension,
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }
    Ok(format)
}

pub async fn load_resume(path: &Path) -> Result<ResumeUpload> {
    if !path.exists() {
        return Err(SkillVerifierError::InvalidInput(
            format!("File does not exist: {}", path.display())
        ));
    }

    let format = detect_format(path)?;
    let bytes = fs::read(path).await?;
    if bytes.is_empty() {
        return Err(SkillVerifierError::InvalidInput(
            format!("Résumé file is empty: {}", path.display())
        ));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());

    info!("Loaded résumé {} ({:?}, {} bytes)", file_name, format, bytes.len());
    Ok(ResumeUpload { file_name, format, bytes })
}
