//! Verification report assembled from a profile, skill mapping and summary

use crate::analysis::{AnalysisOutcome, SkillSummary};
use crate::client::CandidateProfile;
use crate::skills::ResultMapping;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything rendered for one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Candidate profile from the parsing backend, when a résumé was uploaded
    pub profile: Option<CandidateProfile>,

    /// GitHub account the skills were verified against
    pub github_username: Option<String>,

    /// Charts, cards and top skill
    pub summary: SkillSummary,

    /// Normalized engine output
    pub skills: ResultMapping,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub verifier_version: String,

    /// Résumé file, captured response file, or "command line"
    pub source: String,

    pub processing_time_ms: u64,
}

impl VerificationReport {
    pub fn from_outcome(outcome: AnalysisOutcome, source: &str) -> Self {
        Self {
            profile: outcome.profile,
            github_username: Some(outcome.github_username),
            summary: outcome.summary,
            skills: outcome.mapping,
            metadata: ReportMetadata::new(source, outcome.elapsed.as_millis() as u64),
        }
    }

    /// Report over an already normalized mapping (no profile, no network).
    pub fn from_mapping(mapping: ResultMapping, source: &str) -> Self {
        Self {
            profile: None,
            github_username: None,
            summary: SkillSummary::from_mapping(&mapping),
            skills: mapping,
            metadata: ReportMetadata::new(source, 0),
        }
    }

    /// Display name for the candidate section.
    pub fn candidate_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .map(|p| p.user.as_str())
            .filter(|u| !u.is_empty())
            .or(self.github_username.as_deref())
    }
}

impl ReportMetadata {
    pub fn new(source: &str, processing_time_ms: u64) -> Self {
        Self {
            generated_at: SystemTime::now(),
            verifier_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.to_string(),
            processing_time_ms,
        }
    }

    pub fn generated_at_utc(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.generated_at)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }
}
