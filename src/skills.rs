//! Skill evidence data model returned by the skill-verification service

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Radar weight used when a label is missing or not recognised.
pub const DEFAULT_LEVEL_WEIGHT: u8 = 20;

/// Descriptive label attached to a skill dimension (complexity, maturity, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Low,
    Medium,
    High,
    Experimental,
    Stable,
    Occasional,
    Consistent,
    Active,
    Stale,
    Dormant,
    OneOff,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::Experimental => "Experimental",
            Level::Stable => "Stable",
            Level::Occasional => "Occasional",
            Level::Consistent => "Consistent",
            Level::Active => "Active",
            Level::Stale => "Stale",
            Level::Dormant => "Dormant",
            Level::OneOff => "One-off",
            Level::Other(label) => label,
        }
    }

    /// Weight on a 0-100 scale used for the detailed metrics chart.
    pub fn weight(&self) -> u8 {
        match self {
            Level::Low => 30,
            Level::Medium => 60,
            Level::High => 90,
            Level::Experimental => 40,
            Level::Stable => 85,
            Level::Occasional => 55,
            Level::Consistent => 85,
            Level::Active => 90,
            Level::Stale => 40,
            Level::Dormant => 10,
            Level::OneOff => 20,
            Level::Other(_) => DEFAULT_LEVEL_WEIGHT,
        }
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Low" => Level::Low,
            "Medium" => Level::Medium,
            "High" => Level::High,
            "Experimental" => Level::Experimental,
            "Stable" => Level::Stable,
            "Occasional" => Level::Occasional,
            "Consistent" => Level::Consistent,
            "Active" => Level::Active,
            "Stale" => Level::Stale,
            "Dormant" => Level::Dormant,
            "One-off" => Level::OneOff,
            _ => Level::Other(label),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Similarity between the claimed skill and the code found for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSimilarity {
    /// Confidence in [0, 1]
    pub score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Evidence record for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub semantic_similarity: SemanticSimilarity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Level>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_maturity: Option<Level>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Level>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recency: Option<Level>,

    /// Fields the service sends that this client does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SkillRecord {
    pub fn score(&self) -> f64 {
        self.semantic_similarity.score
    }

    pub fn evidence(&self) -> Option<&str> {
        self.semantic_similarity.evidence.as_deref()
    }
}

/// Value reported for one key of the merged response.
///
/// Anything that does not decode as a [`SkillRecord`] is kept verbatim so
/// normalization never drops a key the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Verified(SkillRecord),
    Unverified(Value),
}

impl SkillEntry {
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<SkillRecord>(value.clone()) {
            Ok(record) => SkillEntry::Verified(record),
            Err(_) => SkillEntry::Unverified(value),
        }
    }

    pub fn record(&self) -> Option<&SkillRecord> {
        match self {
            SkillEntry::Verified(record) => Some(record),
            SkillEntry::Unverified(_) => None,
        }
    }
}

/// Skill name to evidence entry, produced once by normalization.
///
/// Entries are kept ordered by skill name so every rendering of the same
/// response is identical.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMapping {
    skills: BTreeMap<String, SkillEntry>,
}

impl ResultMapping {
    pub(crate) fn from_entries(skills: BTreeMap<String, SkillEntry>) -> Self {
        Self { skills }
    }

    /// Typed record for `skill`, `None` when absent or unverified.
    pub fn get(&self, skill: &str) -> Option<&SkillRecord> {
        self.skills.get(skill).and_then(SkillEntry::record)
    }

    pub fn entry(&self, skill: &str) -> Option<&SkillEntry> {
        self.skills.get(skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.keys().map(String::as_str)
    }

    /// Skills whose value decoded as a full record.
    pub fn records(&self) -> impl Iterator<Item = (&str, &SkillRecord)> {
        self.skills
            .iter()
            .filter_map(|(name, entry)| entry.record().map(|record| (name.as_str(), record)))
    }

    /// Keys whose value did not look like a skill record.
    pub fn unverified(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.skills.iter().filter_map(|(name, entry)| match entry {
            SkillEntry::Unverified(value) => Some((name.as_str(), value)),
            SkillEntry::Verified(_) => None,
        })
    }
}
