//! Derived metrics over a normalized skill mapping

use crate::skills::{Level, ResultMapping, SkillRecord, DEFAULT_LEVEL_WEIGHT};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse verdict for one skill score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    Skilled,
    Moderate,
    Beginner,
}

impl ScoreLevel {
    /// Above 50% is skilled, 40-50% moderate, anything lower beginner.
    pub fn from_score(score: f64) -> Self {
        let percent = score * 100.0;
        if percent > 50.0 {
            ScoreLevel::Skilled
        } else if percent >= 40.0 {
            ScoreLevel::Moderate
        } else {
            ScoreLevel::Beginner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Skilled => "Skilled",
            ScoreLevel::Moderate => "Moderate",
            ScoreLevel::Beginner => "Beginner",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of skills in each level, for the distribution chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDistribution {
    pub skilled: usize,
    pub moderate: usize,
    pub beginner: usize,
}

impl SkillDistribution {
    pub fn total(&self) -> usize {
        self.skilled + self.moderate + self.beginner
    }

    pub fn count(&self, level: ScoreLevel) -> usize {
        match level {
            ScoreLevel::Skilled => self.skilled,
            ScoreLevel::Moderate => self.moderate,
            ScoreLevel::Beginner => self.beginner,
        }
    }
}

/// Detailed metrics on a 0-100 scale (complexity, maturity, consistency, recency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetrics {
    pub complexity: u8,
    pub maturity: u8,
    pub consistency: u8,
    pub recency: u8,
}

impl SkillMetrics {
    pub fn from_record(record: &SkillRecord) -> Self {
        Self {
            complexity: level_weight(record.complexity.as_ref()),
            maturity: level_weight(record.project_maturity.as_ref()),
            consistency: level_weight(record.consistency.as_ref()),
            recency: level_weight(record.recency.as_ref()),
        }
    }

    pub fn axes(&self) -> [(&'static str, u8); 4] {
        [
            ("Complexity", self.complexity),
            ("Maturity", self.maturity),
            ("Consistency", self.consistency),
            ("Recency", self.recency),
        ]
    }
}

fn level_weight(level: Option<&Level>) -> u8 {
    level.map(Level::weight).unwrap_or(DEFAULT_LEVEL_WEIGHT)
}

/// One skill as presented in a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCard {
    pub name: String,
    pub score: f64,
    pub confidence_percent: u8,
    pub level: ScoreLevel,
    pub evidence: Option<String>,
    pub complexity: Option<String>,
    pub maturity: Option<String>,
    pub consistency: Option<String>,
    pub recency: Option<String>,
    pub metrics: SkillMetrics,
}

impl SkillCard {
    pub fn from_record(name: &str, record: &SkillRecord) -> Self {
        let score = record.score();
        Self {
            name: name.to_string(),
            score,
            confidence_percent: (score * 100.0).round().clamp(0.0, 100.0) as u8,
            level: ScoreLevel::from_score(score),
            evidence: record.evidence().map(str::to_string),
            complexity: record.complexity.as_ref().map(Level::to_string),
            maturity: record.project_maturity.as_ref().map(Level::to_string),
            consistency: record.consistency.as_ref().map(Level::to_string),
            recency: record.recency.as_ref().map(Level::to_string),
            metrics: SkillMetrics::from_record(record),
        }
    }

    pub fn evidence_or_none(&self) -> &str {
        self.evidence.as_deref().unwrap_or("None")
    }
}

/// Aggregate view over every verified skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub total_skills: usize,
    pub top_skill: Option<String>,
    pub distribution: SkillDistribution,
    pub cards: Vec<SkillCard>,

    /// Response keys that carried no usable skill record
    #[serde(default)]
    pub unverified: Vec<String>,
}

impl SkillSummary {
    pub fn from_mapping(mapping: &ResultMapping) -> Self {
        let cards: Vec<SkillCard> = mapping
            .records()
            .map(|(name, record)| SkillCard::from_record(name, record))
            .collect();

        let unverified: Vec<String> = mapping.unverified().map(|(name, _)| name.to_string()).collect();
        if !unverified.is_empty() {
            warn!("Leaving {} unverified entries out of the summary: {}", unverified.len(), unverified.join(", "));
        }

        let mut distribution = SkillDistribution::default();
        for card in &cards {
            match card.level {
                ScoreLevel::Skilled => distribution.skilled += 1,
                ScoreLevel::Moderate => distribution.moderate += 1,
                ScoreLevel::Beginner => distribution.beginner += 1,
            }
        }

        Self {
            total_skills: cards.len(),
            top_skill: top_skill(&cards).map(|card| card.name.clone()),
            distribution,
            cards,
            unverified,
        }
    }

    pub fn top_skill_or_na(&self) -> &str {
        self.top_skill.as_deref().unwrap_or("N/A")
    }

    pub fn card(&self, name: &str) -> Option<&SkillCard> {
        self.cards.iter().find(|c| c.name == name)
    }
}

// Ties keep the earlier card (cards are ordered by skill name).
fn top_skill(cards: &[SkillCard]) -> Option<&SkillCard> {
    cards.iter().fold(None, |best: Option<&SkillCard>, card| match best {
        Some(b) if b.score >= card.score => Some(b),
        _ => Some(card),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn sample_mapping() -> ResultMapping {
        normalize(concat!(
            r#"{"Rust":{"semantic_similarity":{"score":0.82,"evidence":"async services"},"complexity":"High","project_maturity":"Stable","consistency":"Consistent","recency":"Active"}}"#,
            r#"{"Go":{"semantic_similarity":{"score":0.5}}}"#,
            r#"{"Java":{"semantic_similarity":{"score":0.4}}}"#,
            r#"{"status":"done"}{"PHP":{"semantic_similarity":{"score":0.12}}}"#,
        ))
        .unwrap()
    }

    #[test]
    fn test_score_level_boundaries() {
        assert_eq!(ScoreLevel::from_score(0.51), ScoreLevel::Skilled);
        assert_eq!(ScoreLevel::from_score(0.5), ScoreLevel::Moderate);
        assert_eq!(ScoreLevel::from_score(0.4), ScoreLevel::Moderate);
        assert_eq!(ScoreLevel::from_score(0.39), ScoreLevel::Beginner);
        assert_eq!(ScoreLevel::from_score(0.0), ScoreLevel::Beginner);
    }

    #[test]
    fn test_summary_distribution_and_top_skill() {
        let summary = SkillSummary::from_mapping(&sample_mapping());

        assert_eq!(summary.total_skills, 4);
        assert_eq!(summary.top_skill_or_na(), "Rust");
        assert_eq!(
            summary.distribution,
            SkillDistribution { skilled: 1, moderate: 2, beginner: 1 }
        );
        assert_eq!(summary.distribution.total(), summary.total_skills);
    }

    #[test]
    fn test_card_fields() {
        let summary = SkillSummary::from_mapping(&sample_mapping());

        let rust = summary.card("Rust").unwrap();
        assert_eq!(rust.confidence_percent, 82);
        assert_eq!(rust.level, ScoreLevel::Skilled);
        assert_eq!(rust.evidence_or_none(), "async services");
        assert_eq!(
            rust.metrics,
            SkillMetrics { complexity: 90, maturity: 85, consistency: 85, recency: 90 }
        );

        let go = summary.card("Go").unwrap();
        assert_eq!(go.evidence_or_none(), "None");
        assert_eq!(
            go.metrics,
            SkillMetrics { complexity: 20, maturity: 20, consistency: 20, recency: 20 }
        );
    }

    #[test]
    fn test_top_skill_tie_keeps_first_by_name() {
        let mapping = normalize(
            r#"[{"Zig":{"semantic_similarity":{"score":0.7}},"Ada":{"semantic_similarity":{"score":0.7}}}]"#,
        )
        .unwrap();
        let summary = SkillSummary::from_mapping(&mapping);
        assert_eq!(summary.top_skill.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = SkillSummary::from_mapping(&ResultMapping::default());
        assert_eq!(summary.top_skill_or_na(), "N/A");
        assert_eq!(summary.total_skills, 0);
    }

    #[test]
    fn test_unverified_entries_are_left_out_of_cards() {
        let mapping = normalize(
            r#"{"Rust":{"semantic_similarity":{"score":0.9}},"repo_count":3,"Zig":{"complexity":"Low"}}"#,
        )
        .unwrap();
        let summary = SkillSummary::from_mapping(&mapping);

        assert_eq!(summary.total_skills, 1);
        assert_eq!(summary.top_skill_or_na(), "Rust");
        assert_eq!(summary.unverified, vec!["Zig".to_string(), "repo_count".to_string()]);
    }
}
