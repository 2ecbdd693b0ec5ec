//! Configuration management for the skill verifier

use crate::error::{Result, SkillVerifierError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub services: ServiceConfig,
    pub animation: AnimationConfig,
    pub output: OutputConfig,
}

/// Remote endpoints, handed explicitly to the HTTP clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub parser_base_url: String,
    pub skill_engine_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub step_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            parser_base_url: "http://localhost:5000".to_string(),
            skill_engine_url: "https://ror-12-skill-engine.hf.space/analyze/github".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_interval_ms: 1500,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: ServiceConfig::default(),
            animation: AnimationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults on first use.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillVerifierError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillVerifierError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-verifier")
            .join("config.toml")
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.animation.step_interval_ms)
    }

    /// Set a value by dotted key, e.g. `services.timeout_secs`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "services.parser_base_url" => self.services.parser_base_url = parse_url(key, value)?,
            "services.skill_engine_url" => self.services.skill_engine_url = parse_url(key, value)?,
            "services.timeout_secs" => self.services.timeout_secs = parse_value(key, value)?,
            "animation.enabled" => self.animation.enabled = parse_value(key, value)?,
            "animation.step_interval_ms" => self.animation.step_interval_ms = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(SkillVerifierError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_value(key, value)?,
            _ => {
                return Err(SkillVerifierError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        SkillVerifierError::Configuration(format!("Invalid value '{}' for {}: {}", value, key, e))
    })
}

fn parse_url(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(SkillVerifierError::Configuration(format!(
            "{} must be an http(s) URL, got '{}'",
            key, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.services.parser_base_url = "https://parser.internal:8443".to_string();
        config.output.format = OutputFormat::Markdown;
        config.animation.enabled = false;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "services = 3").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(SkillVerifierError::Configuration(_))
        ));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();

        config.set_value("services.timeout_secs", "30").unwrap();
        config.set_value("animation.step_interval_ms", "2500").unwrap();
        config.set_value("output.format", "html").unwrap();
        config.set_value("services.skill_engine_url", "http://localhost:7860/analyze/github").unwrap();

        assert_eq!(config.services.timeout_secs, 30);
        assert_eq!(config.step_interval(), Duration::from_millis(2500));
        assert_eq!(config.output.format, OutputFormat::Html);
        assert_eq!(config.services.skill_engine_url, "http://localhost:7860/analyze/github");
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();

        assert!(config.set_value("services.timeout_secs", "soon").is_err());
        assert!(config.set_value("services.parser_base_url", "ftp://x").is_err());
        assert!(config.set_value("output.format", "pdf").is_err());
        assert!(config.set_value("models.default", "x").is_err());
        assert_eq!(config, Config::default());
    }
}
