//! Response normalization for the skill-verification service
//!
//! The service streams its answer as JSON objects written back to back,
//! often without separators or an enclosing array, interleaved with
//! `{"status": ...}` progress messages. [`normalize`] repairs that text and
//! folds it into a single [`ResultMapping`]:
//!
//! 1. [`sanitize`]: strip line breaks, separate `}{` adjacencies outside
//!    string literals, wrap in `[...]` when needed
//! 2. [`fold`]: parse, drop status messages, merge last-write-wins, decode
//!    typed entries (values that are not skill records are kept unverified)

pub mod fold;
pub mod sanitize;

use crate::skills::ResultMapping;
use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizationError {
    #[error("Empty response from AI")]
    EmptyResponse,

    #[error("Invalid JSON format from AI: {reason}")]
    MalformedJson { raw: String, reason: String },

    #[error("No analysis data found in response")]
    NoAnalysisData,
}

impl NormalizationError {
    /// Short message shown in place of the results.
    pub fn user_message(&self) -> &'static str {
        match self {
            NormalizationError::EmptyResponse => "Empty response from AI.",
            NormalizationError::MalformedJson { .. } => "Invalid JSON format.",
            NormalizationError::NoAnalysisData => "No analysis data found in response.",
        }
    }
}

/// Normalize a raw response body into a skill mapping.
///
/// Pure apart from diagnostic logging: the same input always yields the same
/// mapping or the same error.
pub fn normalize(raw: &str) -> Result<ResultMapping, NormalizationError> {
    if raw.trim().is_empty() {
        return Err(NormalizationError::EmptyResponse);
    }

    let repaired = sanitize::sanitize(raw);

    let entries = fold::parse_stream(&repaired).map_err(|reason| {
        error!("JSON parse error: {} | raw: {}", reason, raw);
        NormalizationError::MalformedJson {
            raw: raw.to_string(),
            reason,
        }
    })?;
    debug!("Parsed {} stream entries", entries.len());

    let merged = fold::fold_entries(entries);
    if merged.is_empty() {
        return Err(NormalizationError::NoAnalysisData);
    }

    Ok(fold::decode_entries(merged))
}
