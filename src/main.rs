//! Skill verifier: résumé upload, AI skill verification and evidence reports

use clap::Parser;
use log::{error, info};
use skill_verifier::analysis::AnalysisSession;
use skill_verifier::cli::{self, Cli, Commands, ConfigAction};
use skill_verifier::config::{Config, OutputFormat};
use skill_verifier::error::{Result, SkillVerifierError};
use skill_verifier::normalize::normalize;
use skill_verifier::output::{
    format_failure, save_report_to_file, suggest_filename, ReportGenerator, VerificationReport,
};
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };
    let use_colors = config.output.color_output;

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        eprintln!("{}", format_failure(&e.user_message(), use_colors));
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            username,
            output,
            save,
            detailed,
            no_animation,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            println!("🚀 Skill verification analysis");
            println!("📄 Resume: {}", resume.display());
            println!("🔧 Output Format: {:?}", format);

            let session = AnalysisSession::new(&config, !no_animation)?;
            let outcome = session.analyze_resume(&resume, username.as_deref()).await?;
            info!(
                "Analysis of '{}' finished in {}ms",
                outcome.github_username,
                outcome.elapsed.as_millis()
            );

            let report = VerificationReport::from_outcome(outcome, &resume.to_string_lossy());
            emit_report(&report, format, detailed || config.output.detailed, save, &config)
        }

        Commands::Verify {
            username,
            skills,
            output,
            save,
            detailed,
            no_animation,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            println!("🚀 Verifying {} skills for {}", skills.len(), username);

            let session = AnalysisSession::new(&config, !no_animation)?;
            let outcome = session.verify_skills(&username, &skills).await?;

            let report = VerificationReport::from_outcome(outcome, "command line");
            emit_report(&report, format, detailed || config.output.detailed, save, &config)
        }

        Commands::Normalize {
            input,
            output,
            save,
            detailed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let (raw, source) = read_raw_response(&input).await?;

            let mapping = normalize(&raw)?;
            info!("Normalized {} skills from {}", mapping.len(), source);

            let report = VerificationReport::from_mapping(mapping, &source);
            emit_report(&report, format, detailed || config.output.detailed, save, &config)
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| SkillVerifierError::Configuration(e.to_string()))?;
                println!("# {}\n{}", config_path.display(), content);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults");
                Ok(())
            }
            ConfigAction::Set { key, value } => {
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ {} = {}", key, value);
                Ok(())
            }
        },
    }
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(SkillVerifierError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn read_raw_response(input: &Path) -> Result<(String, String)> {
    if input == Path::new("-") {
        let mut raw = String::new();
        tokio::io::stdin().read_to_string(&mut raw).await?;
        Ok((raw, "stdin".to_string()))
    } else {
        let raw = tokio::fs::read_to_string(input).await?;
        Ok((raw, input.to_string_lossy().to_string()))
    }
}

fn emit_report(
    report: &VerificationReport,
    format: OutputFormat,
    detailed: bool,
    save: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, config.output.pretty_json, true);
    let content = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(&format, &report.metadata.source, true))
            } else {
                path
            };
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
