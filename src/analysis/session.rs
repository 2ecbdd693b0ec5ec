//! One analysis session: upload the résumé, verify its skills, summarize

use crate::analysis::progress::{AnalysisProgress, UPLOAD_STEPS, VERIFICATION_STEPS};
use crate::analysis::summary::SkillSummary;
use crate::cli::clean_skill_list;
use crate::client::{CandidateProfile, ResumeParserClient, SkillEngineClient};
use crate::config::Config;
use crate::error::{Result, SkillVerifierError};
use crate::input::load_resume;
use crate::skills::ResultMapping;
use log::{info, warn};
use std::path::Path;
use std::time::{Duration, Instant};

/// Everything a report needs from one session.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub profile: Option<CandidateProfile>,
    pub github_username: String,
    pub mapping: ResultMapping,
    pub summary: SkillSummary,
    pub elapsed: Duration,
}

/// Runs requests one at a time; a session never has two verifications in flight.
pub struct AnalysisSession {
    parser: ResumeParserClient,
    engine: SkillEngineClient,
    animate: bool,
    step_interval: Duration,
}

impl AnalysisSession {
    pub fn new(config: &Config, animate: bool) -> Result<Self> {
        Ok(Self {
            parser: ResumeParserClient::new(&config.services)?,
            engine: SkillEngineClient::new(&config.services)?,
            animate: animate && config.animation.enabled,
            step_interval: config.step_interval(),
        })
    }

    /// Upload a résumé file and return the parsed profile.
    pub async fn parse_profile(&self, resume: &Path) -> Result<CandidateProfile> {
        let upload = load_resume(resume).await?;

        let mut progress = AnalysisProgress::new(UPLOAD_STEPS, self.step_interval, self.animate);
        match progress.run(self.parser.parse_resume(&upload)).await {
            Ok(profile) => {
                progress.finish(&format!(
                    "✅ Résumé parsed: {} skills found",
                    profile.skills_found.len()
                ));
                Ok(profile)
            }
            Err(e) => {
                progress.clear();
                Err(e)
            }
        }
    }

    /// Ask the skill engine to verify `skills` for `github_username`.
    pub async fn verify(&self, github_username: &str, skills: &[String]) -> Result<ResultMapping> {
        let skills = clean_skill_list(skills);
        if skills.is_empty() {
            return Err(SkillVerifierError::InvalidInput(
                "No skills to verify".to_string(),
            ));
        }

        let mut progress = AnalysisProgress::new(VERIFICATION_STEPS, self.step_interval, self.animate);
        match progress.run(self.engine.verify(github_username, &skills)).await {
            Ok(mapping) => {
                progress.finish(&format!("✅ Verification complete: {} skills", mapping.len()));
                Ok(mapping)
            }
            Err(e) => {
                progress.clear();
                Err(e)
            }
        }
    }

    /// Full flow: résumé upload, skill verification, summary.
    pub async fn analyze_resume(
        &self,
        resume: &Path,
        username_override: Option<&str>,
    ) -> Result<AnalysisOutcome> {
        let started = Instant::now();
        info!("Starting analysis of {}", resume.display());

        let profile = self.parse_profile(resume).await?;
        let github_username = resolve_username(username_override, &profile)?;

        let mapping = self.verify(&github_username, &profile.skills_found).await?;
        let summary = SkillSummary::from_mapping(&mapping);

        Ok(AnalysisOutcome {
            profile: Some(profile),
            github_username,
            mapping,
            summary,
            elapsed: started.elapsed(),
        })
    }

    /// Verification without a résumé upload.
    pub async fn verify_skills(&self, github_username: &str, skills: &[String]) -> Result<AnalysisOutcome> {
        let started = Instant::now();
        let mapping = self.verify(github_username, skills).await?;
        let summary = SkillSummary::from_mapping(&mapping);

        Ok(AnalysisOutcome {
            profile: None,
            github_username: github_username.to_string(),
            mapping,
            summary,
            elapsed: started.elapsed(),
        })
    }
}

/// The explicit override wins; otherwise the username parsed from the résumé.
pub fn resolve_username(username_override: Option<&str>, profile: &CandidateProfile) -> Result<String> {
    if let Some(name) = username_override.map(str::trim).filter(|n| !n.is_empty()) {
        if !profile.user.is_empty() && profile.user != name {
            warn!("Using '{}' instead of résumé username '{}'", name, profile.user);
        }
        return Ok(name.to_string());
    }

    let parsed = profile.user.trim();
    if parsed.is_empty() {
        return Err(SkillVerifierError::InvalidInput(
            "No GitHub username found on the résumé; pass --username".to_string(),
        ));
    }
    Ok(parsed.to_string())
}
