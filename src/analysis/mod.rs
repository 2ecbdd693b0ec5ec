//! Analysis flow around the normalizer: progress animation, session
//! orchestration and derived metrics

pub mod progress;
pub mod session;
pub mod summary;

pub use session::{AnalysisOutcome, AnalysisSession};
pub use summary::{ScoreLevel, SkillCard, SkillDistribution, SkillMetrics, SkillSummary};
