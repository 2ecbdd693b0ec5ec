//! Skill verification against the remote AI engine

use crate::client::{backend_error, build_http_client};
use crate::config::ServiceConfig;
use crate::error::{Result, SkillVerifierError};
use crate::normalize::normalize;
use crate::skills::ResultMapping;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;

/// JSON body sent to the engine.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerificationRequest<'a> {
    pub github_username: &'a str,
    pub skills: &'a [String],
}

#[derive(Clone)]
pub struct SkillEngineClient {
    client: Client,
    url: String,
}

impl SkillEngineClient {
    pub fn new(services: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(services)?,
            url: services.skill_engine_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the request and return the raw, unnormalized response body.
    pub async fn fetch_raw(&self, github_username: &str, skills: &[String]) -> Result<String> {
        if github_username.trim().is_empty() {
            return Err(SkillVerifierError::InvalidInput(
                "A GitHub username is required for skill verification".to_string(),
            ));
        }

        let request = VerificationRequest {
            github_username,
            skills,
        };
        info!(
            "Requesting verification of {} skills for '{}'",
            skills.len(),
            github_username
        );

        let response = self.client.post(&self.url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(backend_error(response, "Skill verification failed").await);
        }

        let raw = response.text().await?;
        debug!("Skill engine returned {} bytes", raw.len());
        Ok(raw)
    }

    /// Fetch and normalize the engine's answer in one step.
    pub async fn verify(&self, github_username: &str, skills: &[String]) -> Result<ResultMapping> {
        let raw = self.fetch_raw(github_username, skills).await?;
        let mapping = normalize(&raw)?;
        info!("Verified {} skills", mapping.len());
        Ok(mapping)
    }
}
