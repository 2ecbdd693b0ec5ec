//! Skill verifier library

pub mod analysis;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod skills;

pub use config::Config;
pub use error::{Result, SkillVerifierError};
pub use normalize::{normalize, NormalizationError};
pub use skills::{Level, ResultMapping, SkillEntry, SkillRecord};
