//! HTTP clients for the two remote collaborators: the résumé parsing backend
//! and the skill-verification engine.
//!
//! Both clients take their endpoints from [`ServiceConfig`]; nothing here
//! hardcodes a host.

pub mod resume_parser;
pub mod skill_engine;

#[cfg(test)]
pub(crate) mod test_server;

use crate::config::ServiceConfig;
use crate::error::{Result, SkillVerifierError};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

pub use resume_parser::{CandidateProfile, ResumeParserClient};
pub use skill_engine::{SkillEngineClient, VerificationRequest};

pub(crate) fn build_http_client(services: &ServiceConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(services.timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Pull a human readable message out of an error body.
///
/// Understands `{"error": "..."}` (parsing backend) and `{"detail": "..."}`
/// (skill engine); falls back to the trimmed body text.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "detail", "message"] {
            match value.get(key) {
                Some(Value::String(message)) if !message.trim().is_empty() => {
                    return Some(message.trim().to_string())
                }
                Some(other) if !other.is_null() && !other.is_string() => {
                    return Some(other.to_string())
                }
                _ => {}
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Turn a non-success response into a [`SkillVerifierError::Backend`].
pub(crate) async fn backend_error(response: Response, fallback: &str) -> SkillVerifierError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    log::warn!("Backend returned {}: {}", status, body);

    SkillVerifierError::Backend {
        status,
        message: extract_error_message(&body).unwrap_or_else(|| fallback.to_string()),
    }
}
