//! CLI interface for the skill verifier

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-verifier")]
#[command(about = "Verify résumé skills against GitHub activity")]
#[command(long_about = "Upload a résumé to the parsing backend, verify the skills it lists with the AI skill engine, and render the evidence as charts and cards")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a résumé and verify the skills found in it
    Analyze {
        /// Path to résumé file (PDF, DOC, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// GitHub username to verify against (defaults to the one found on the résumé)
        #[arg(short, long)]
        username: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the parsed résumé text and per-skill metrics
        #[arg(short, long)]
        detailed: bool,

        /// Do not show the progress animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Verify a list of skills for a GitHub user without uploading a résumé
    Verify {
        /// GitHub username
        #[arg(short, long)]
        username: String,

        /// Comma separated skills, e.g. "Rust,Go,Docker"
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Include per-skill metrics
        #[arg(short, long)]
        detailed: bool,

        /// Do not show the progress animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Normalize a captured skill engine response ("-" reads stdin)
    Normalize {
        /// File holding the raw response body
        input: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include per-skill metrics
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "services.skill_engine_url")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Trim, drop empties and de-duplicate skills while keeping their order.
pub fn clean_skill_list(skills: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !cleaned.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            cleaned.push(skill.to_string());
        }
    }
    cleaned
}
