//! Output formatters: console charts and cards, JSON, Markdown and HTML

use crate::analysis::{ScoreLevel, SkillCard, SkillSummary};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 24;
const LEVELS: [ScoreLevel; 3] = [ScoreLevel::Skilled, ScoreLevel::Moderate, ScoreLevel::Beginner];

/// Trait for formatting verification reports
pub trait OutputFormatter {
    fn format_report(&self, report: &VerificationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors, bar charts and skill cards
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skill Verification Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0f0529; color: #f1f5f9; max-width: 1000px; margin: 0 auto; padding: 24px; }
        .panel { background: rgba(15, 23, 42, 0.8); border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; padding: 20px; margin: 20px 0; }
        .muted { color: #9ca3af; font-size: 0.85em; }
        .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; }
        .card { border-radius: 12px; padding: 16px; border: 1px solid; }
        .skilled { border-color: rgba(34,197,94,0.5); background: rgba(34,197,94,0.1); }
        .moderate { border-color: rgba(234,179,8,0.5); background: rgba(234,179,8,0.1); }
        .beginner { border-color: rgba(239,68,68,0.5); background: rgba(239,68,68,0.1); }
        .badge { float: right; font-size: 0.75em; font-weight: bold; padding: 2px 8px; border-radius: 4px; background: rgba(0,0,0,0.3); }
        .score { font-size: 2.2em; font-weight: bold; }
        .bar { height: 12px; border-radius: 6px; background: #1e293b; margin: 4px 0 10px; }
        .fill { height: 12px; border-radius: 6px; }
        .fill.skilled { background: #4ade80; }
        .fill.moderate { background: #facc15; }
        .fill.beginner { background: #f87171; }
        .fill.metric { background: #a855f7; }
        ul.timeline { border-left: 2px solid rgba(6,182,212,0.3); padding-left: 20px; }
        pre { white-space: pre-wrap; color: rgba(74,222,128,0.8); }
    </style>
    {% endif %}
</head>
<body>
    <h1>Skill Verification Report</h1>
    <p class="muted">Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>

    {% if has_profile %}
    <div class="panel">
        <p class="muted">CANDIDATE PROFILE</p>
        <h2>{{ candidate }}</h2>
        <p>Email: {{ email }} | Phone: {{ phone }}</p>
        <p>Education: {{ education }}</p>
    </div>
    {% endif %}

    <div class="panel">
        <h2>Skill Distribution</h2>
        {% for row in distribution %}
        <p>{{ row.label }}: {{ row.count }}</p>
        <div class="bar"><div class="fill {{ row.class }}" style="width: {{ row.percent }}%"></div></div>
        {% endfor %}
        <h3>Summary</h3>
        <p>Top Skill: <strong>{{ top_skill }}</strong> | Total Skills: <strong>{{ total_skills }}</strong></p>
    </div>

    <div class="grid">
        {% for card in cards %}
        <div class="card {{ card.class }}">
            <span class="badge">{{ card.level }}</span>
            <h3>{{ card.name }}</h3>
            <p><span class="score">{{ card.confidence }}%</span> <span class="muted">Confidence</span></p>
            <p>Evidence: {{ card.evidence }}</p>
            {% if detailed %}
            {% for metric in card.metrics %}
            <p class="muted">{{ metric.label }}: {{ metric.value }}</p>
            <div class="bar"><div class="fill metric" style="width: {{ metric.weight }}%"></div></div>
            {% endfor %}
            {% endif %}
        </div>
        {% endfor %}
    </div>

    {% if has_profile %}
    <div class="panel">
        <h2>Professional Experience</h2>
        {% if experience.is_empty() %}
        <p class="muted">No experience extracted from resume.</p>
        {% else %}
        <ul class="timeline">
            {% for entry in experience %}
            <li>{{ entry }}</li>
            {% endfor %}
        </ul>
        {% endif %}
    </div>
    {% endif %}

    {% if has_raw_text %}
    <div class="panel">
        <h2>Parsed Resume Content</h2>
        <pre>{{ raw_text }}</pre>
    </div>
    {% endif %}

    <p class="muted">Generated by Skill Verifier v{{ version }} | Source: {{ source }}</p>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    detailed: bool,
    generated_at: String,
    processing_time: u64,
    has_profile: bool,
    candidate: String,
    email: String,
    phone: String,
    education: String,
    experience: Vec<String>,
    has_raw_text: bool,
    raw_text: String,
    distribution: Vec<HtmlDistributionRow>,
    top_skill: String,
    total_skills: usize,
    cards: Vec<HtmlCard>,
    version: String,
    source: String,
}

struct HtmlDistributionRow {
    label: &'static str,
    class: &'static str,
    count: usize,
    percent: u32,
}

struct HtmlCard {
    name: String,
    level: &'static str,
    class: &'static str,
    confidence: u8,
    evidence: String,
    metrics: Vec<HtmlMetric>,
}

struct HtmlMetric {
    label: &'static str,
    value: String,
    weight: u8,
}

fn level_color(level: ScoreLevel) -> Color {
    match level {
        ScoreLevel::Skilled => Color::Green,
        ScoreLevel::Moderate => Color::Yellow,
        ScoreLevel::Beginner => Color::Red,
    }
}

fn level_class(level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::Skilled => "skilled",
        ScoreLevel::Moderate => "moderate",
        ScoreLevel::Beginner => "beginner",
    }
}

/// Horizontal bar of `width` cells filled in proportion to `value / max`.
pub fn render_bar(value: usize, max: usize, width: usize) -> String {
    let filled = match max {
        0 => 0,
        _ => (((value as f64 / max as f64) * width as f64).round() as usize).min(width),
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn share_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Label and raw value for one detailed metric, "Unknown" when missing.
fn metric_rows(card: &SkillCard) -> [(&'static str, String, u8); 4] {
    let label = |value: &Option<String>| value.clone().unwrap_or_else(|| "Unknown".to_string());
    [
        ("Complexity", label(&card.complexity), card.metrics.complexity),
        ("Maturity", label(&card.maturity), card.metrics.maturity),
        ("Consistency", label(&card.consistency), card.metrics.consistency),
        ("Recency", label(&card.recency), card.metrics.recency),
    ]
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Magenta,
            2 => Color::Cyan,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_level_badge(&self, level: ScoreLevel) -> String {
        let badge = level.label().to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(level_color(level)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_distribution(&self, summary: &SkillSummary) -> String {
        let mut output = String::new();
        let total = summary.distribution.total();
        for level in LEVELS {
            let count = summary.distribution.count(level);
            output.push_str(&format!(
                "  {:<9} {} {} ({}%)\n",
                level.label(),
                self.colorize(&render_bar(count, total, BAR_WIDTH), level_color(level)),
                count,
                share_percent(count, total)
            ));
        }
        output
    }

    fn format_card(&self, card: &SkillCard) -> String {
        let mut output = format!(
            "  {} {} {}% confidence\n",
            self.colorize(&card.name, Color::White),
            self.format_level_badge(card.level),
            card.confidence_percent
        );
        output.push_str(&format!("     Evidence: {}\n", card.evidence_or_none()));

        if self.detailed {
            for (label, value, weight) in metric_rows(card) {
                output.push_str(&format!(
                    "     {:<12} {} {:<12} {}\n",
                    label,
                    self.colorize(&render_bar(weight as usize, 100, 10), Color::Magenta),
                    value,
                    weight
                ));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &VerificationReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str(&self.format_header("🔎 SKILL VERIFICATION REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at_utc(),
            report.metadata.processing_time_ms
        ));

        if let Some(profile) = &report.profile {
            output.push_str(&self.format_header("👤 Candidate Profile", 2));
            output.push_str(&format!("{}\n", self.colorize(&profile.user, Color::BrightWhite)));
            output.push_str(&format!(
                "📧 {}  📞 {}\n",
                profile.email.as_deref().unwrap_or("N/A"),
                profile.phone.as_deref().unwrap_or("N/A")
            ));
            output.push_str(&format!("🎓 Education: {}\n", profile.primary_education()));
        } else if let Some(name) = report.candidate_name() {
            output.push_str(&format!("GitHub: {}\n", name));
        }

        output.push_str(&self.format_header("📊 Skill Distribution", 2));
        output.push_str(&self.format_distribution(summary));

        output.push_str(&self.format_header("Summary", 3));
        output.push_str(&format!(
            "🏆 Top Skill: {}\n✅ Total Skills: {}\n",
            self.colorize(summary.top_skill_or_na(), Color::Yellow),
            summary.total_skills
        ));
        if !summary.unverified.is_empty() {
            output.push_str(&self.colorize(
                &format!("⚠️  Unverified entries: {}\n", summary.unverified.join(", ")),
                Color::BrightBlack,
            ));
        }

        output.push_str(&self.format_header("🧠 Skill Cards", 2));
        for card in &summary.cards {
            output.push_str(&self.format_card(card));
            output.push('\n');
        }

        if let Some(profile) = &report.profile {
            output.push_str(&self.format_header("💼 Professional Experience", 2));
            if profile.experience.is_empty() {
                output.push_str(&self.colorize("No experience extracted from resume.\n", Color::BrightBlack));
            } else {
                for entry in &profile.experience {
                    output.push_str(&format!("  • {}\n", entry));
                }
            }

            if self.detailed {
                if let Some(raw_text) = profile.raw_text.as_deref().filter(|t| !t.trim().is_empty()) {
                    output.push_str(&self.format_header("📄 Parsed Resume Content", 3));
                    output.push_str(&self.colorize(raw_text.trim_end(), Color::Green));
                    output.push('\n');
                }
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Skill Verifier v{} | Source: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.verifier_version,
            report.metadata.source
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &VerificationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &VerificationReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("# 🔎 Skill Verification Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Source:** `{}`\n\n",
                report.metadata.generated_at_utc(),
                report.metadata.processing_time_ms,
                report.metadata.source
            ));
        }

        if let Some(profile) = &report.profile {
            output.push_str("## Candidate Profile\n\n");
            output.push_str(&format!("**{}**\n\n", profile.user));
            output.push_str(&format!(
                "- Email: {}\n- Phone: {}\n- Education: {}\n\n",
                profile.email.as_deref().unwrap_or("N/A"),
                profile.phone.as_deref().unwrap_or("N/A"),
                profile.primary_education()
            ));
        }

        output.push_str("## Skill Distribution\n\n");
        output.push_str("| Level | Skills | Share |\n");
        output.push_str("|-------|--------|-------|\n");
        let total = summary.distribution.total();
        for level in LEVELS {
            let count = summary.distribution.count(level);
            output.push_str(&format!("| {} | {} | {}% |\n", level.label(), count, share_percent(count, total)));
        }
        output.push('\n');

        output.push_str(&format!(
            "**Top Skill:** {} | **Total Skills:** {}\n\n",
            summary.top_skill_or_na(),
            summary.total_skills
        ));
        if !summary.unverified.is_empty() {
            output.push_str(&format!("_Unverified entries: {}_\n\n", summary.unverified.join(", ")));
        }

        output.push_str("## Skills\n\n");
        output.push_str("| Skill | Level | Confidence | Evidence |\n");
        output.push_str("|-------|-------|------------|----------|\n");
        for card in &summary.cards {
            output.push_str(&format!(
                "| {} | {} | {}% | {} |\n",
                card.name,
                card.level,
                card.confidence_percent,
                card.evidence_or_none().replace('|', "\\|")
            ));
        }
        output.push('\n');

        output.push_str("### Detailed Metrics\n\n");
        output.push_str("| Skill | Complexity | Maturity | Consistency | Recency |\n");
        output.push_str("|-------|------------|----------|-------------|---------|\n");
        for card in &summary.cards {
            let rows = metric_rows(card);
            output.push_str(&format!("| {} ", card.name));
            for (_, value, weight) in rows.iter() {
                output.push_str(&format!("| {} ({}) ", value, weight));
            }
            output.push_str("|\n");
        }
        output.push('\n');

        if let Some(profile) = &report.profile {
            output.push_str("## Professional Experience\n\n");
            if profile.experience.is_empty() {
                output.push_str("_No experience extracted from resume._\n\n");
            } else {
                for entry in &profile.experience {
                    output.push_str(&format!("- {}\n", entry));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Skill Verifier v{}*\n",
                report.metadata.verifier_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &VerificationReport, detailed: bool) -> HtmlTemplate {
        let summary = &report.summary;
        let total = summary.distribution.total();
        let profile = report.profile.as_ref();

        let distribution = LEVELS
            .iter()
            .map(|level| {
                let count = summary.distribution.count(*level);
                HtmlDistributionRow {
                    label: level.label(),
                    class: level_class(*level),
                    count,
                    percent: share_percent(count, total),
                }
            })
            .collect();

        let cards = summary
            .cards
            .iter()
            .map(|card| HtmlCard {
                name: card.name.clone(),
                level: card.level.label(),
                class: level_class(card.level),
                confidence: card.confidence_percent,
                evidence: card.evidence_or_none().to_string(),
                metrics: metric_rows(card)
                    .into_iter()
                    .map(|(label, value, weight)| HtmlMetric { label, value, weight })
                    .collect(),
            })
            .collect();

        let raw_text = profile
            .and_then(|p| p.raw_text.clone())
            .filter(|t| !t.trim().is_empty());

        HtmlTemplate {
            include_styles: self.include_styles,
            detailed,
            generated_at: report.metadata.generated_at_utc(),
            processing_time: report.metadata.processing_time_ms,
            has_profile: profile.is_some(),
            candidate: report.candidate_name().unwrap_or("Unknown").to_string(),
            email: profile.and_then(|p| p.email.clone()).unwrap_or_else(|| "N/A".to_string()),
            phone: profile.and_then(|p| p.phone.clone()).unwrap_or_else(|| "N/A".to_string()),
            education: profile.map(|p| p.primary_education()).unwrap_or("N/A").to_string(),
            experience: profile.map(|p| p.experience.clone()).unwrap_or_default(),
            has_raw_text: detailed && raw_text.is_some(),
            raw_text: raw_text.unwrap_or_default(),
            distribution,
            top_skill: summary.top_skill_or_na().to_string(),
            total_skills: summary.total_skills,
            cards,
            version: report.metadata.verifier_version.clone(),
            source: report.metadata.source.clone(),
        }
    }

    pub fn format_detailed(&self, report: &VerificationReport) -> Result<String> {
        Ok(self.create_template_data(report, true).render()?)
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &VerificationReport) -> Result<String> {
        Ok(self.create_template_data(report, false).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &VerificationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html if self.console_formatter.detailed => {
                self.html_formatter.format_detailed(report)
            }
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Console block shown instead of results when an analysis fails.
pub fn format_failure(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("\n{}\n{}\n", "Analysis Failed".red().bold(), message.bright_red())
    } else {
        format!("\nAnalysis Failed\n{}\n", message)
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, source_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let base_name = if base_name.is_empty() { "skills".into() } else { base_name };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_verification{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_verification{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_verification{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_verification{}.html", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CandidateProfile;
    use crate::normalize::normalize;

    fn sample_report(with_profile: bool) -> VerificationReport {
        let mapping = normalize(concat!(
            r#"{"status":"start"}"#,
            r#"{"Rust":{"semantic_similarity":{"score":0.82,"evidence":"tokio <services>"},"complexity":"High","recency":"Active"}}"#,
            r#"{"Go":{"semantic_similarity":{"score":0.45}}}"#,
            r#"{"PHP":{"semantic_similarity":{"score":0.1,"evidence":"a | b"}}}"#,
        ))
        .unwrap();
        let mut report = VerificationReport::from_mapping(mapping, "capture.txt");
        if with_profile {
            report.profile = Some(CandidateProfile {
                user: "jane-dev".to_string(),
                email: Some("jane@example.com".to_string()),
                phone: None,
                education: vec!["B.Sc. Computer Science".to_string()],
                experience: vec![],
                skills_found: vec!["Rust".to_string(), "Go".to_string(), "PHP".to_string()],
                raw_text: Some("Jane Dev\nRust engineer".to_string()),
            });
        }
        report
    }

    #[test]
    fn test_unverified_entries_are_listed() {
        let mapping = normalize(r#"{"Rust":{"semantic_similarity":{"score":0.9}},"repo_count":3}"#).unwrap();
        let report = VerificationReport::from_mapping(mapping, "capture.txt");

        let console = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(console.contains("Unverified entries: repo_count"));
        assert!(console.contains("Total Skills: 1"));

        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(markdown.contains("_Unverified entries: repo_count_"));

        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skills"]["repo_count"], serde_json::json!(3));
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(1, 2, 4), "██░░");
        assert_eq!(render_bar(0, 0, 3), "░░░");
        assert_eq!(render_bar(5, 5, 2), "██");
    }

    #[test]
    fn test_console_report_plain() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report(true)).unwrap();

        assert!(output.contains("SKILL VERIFICATION REPORT"));
        assert!(output.contains("jane-dev"));
        assert!(output.contains("Education: B.Sc. Computer Science"));
        assert!(output.contains("Top Skill: Rust"));
        assert!(output.contains("Total Skills: 3"));
        assert!(output.contains("Rust [SKILLED] 82% confidence"));
        assert!(output.contains("Go [MODERATE] 45% confidence"));
        assert!(output.contains("Evidence: None"));
        assert!(output.contains("No experience extracted from resume."));
        assert!(!output.contains("Complexity"));
        assert!(!output.contains("Parsed Resume Content"));
    }

    #[test]
    fn test_console_detailed_shows_metrics_and_resume() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report(true)).unwrap();

        assert!(output.contains("Complexity"));
        assert!(output.contains("High"));
        assert!(output.contains("Unknown"));
        assert!(output.contains("Parsed Resume Content"));
        assert!(output.contains("Rust engineer"));
    }

    #[test]
    fn test_json_report_round_trips_skills() {
        let report = sample_report(false);
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["summary"]["top_skill"], "Rust");
        assert_eq!(value["skills"]["Go"]["semantic_similarity"]["score"], 0.45);
        assert_eq!(value["summary"]["distribution"]["beginner"], 1);
    }

    #[test]
    fn test_markdown_report() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report(true)).unwrap();

        assert!(output.starts_with("# 🔎 Skill Verification Report"));
        assert!(output.contains("| Skilled | 1 | 33% |"));
        assert!(output.contains("| Rust | Skilled | 82% | tokio <services> |"));
        assert!(output.contains("a \\| b"));
        assert!(output.contains("| Rust | High (90) | Unknown (20) | Unknown (20) | Active (90) |"));
        assert!(!output.contains("Generated by"));
    }

    #[test]
    fn test_html_report_escapes_content() {
        let output = HtmlFormatter::new(false).format_report(&sample_report(true)).unwrap();

        assert!(output.contains("<h2>jane-dev</h2>"));
        assert!(output.contains("tokio &#60;services&#62;") || output.contains("tokio &lt;services&gt;"));
        assert!(output.contains("No experience extracted from resume."));
        assert!(!output.contains("<style>"));
        assert!(!output.contains("Parsed Resume Content"));
    }

    #[test]
    fn test_html_detailed_includes_metrics() {
        let output = HtmlFormatter::new(true).format_detailed(&sample_report(true)).unwrap();

        assert!(output.contains("<style>"));
        assert!(output.contains("Complexity: High"));
        assert!(output.contains("Parsed Resume Content"));
    }

    #[test]
    fn test_generator_dispatches_every_format() {
        let generator = ReportGenerator::with_options(false, false, true, true);
        let report = sample_report(false);

        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
            let output = generator.generate_report(&report, &format).unwrap();
            assert!(output.contains("Rust"), "{:?} output is missing skills", format);
        }
    }

    #[test]
    fn test_format_failure() {
        let output = format_failure("No analysis data found in response.", false);
        assert!(output.contains("Analysis Failed"));
        assert!(output.contains("No analysis data found in response."));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "/tmp/jane_resume.pdf", false),
            "jane_resume_verification.md"
        );
        assert_eq!(suggest_filename(&OutputFormat::Json, "", false), "skills_verification.json");
    }
}
