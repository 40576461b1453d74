//! Scene validation command

use super::load_settings;
use anyhow::{Context, Result};
use sceneval_core::ValidationReport;
use sceneval_validator::SceneValidator;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

pub struct ValidateArgs {
    pub scene: String,
    pub config: Option<String>,
    pub output: Option<String>,
    pub format: String,
    pub archive: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?.resolve()?;
    let validator = SceneValidator::from_settings(settings)?;

    let report = if !Path::new(&args.scene).is_file() && looks_like_json(&args.scene) {
        let raw: serde_json::Value =
            serde_json::from_str(&args.scene).context("Invalid JSON string provided")?;
        validator.validate(&raw)
    } else {
        validator
            .validate_from_source(&args.scene)
            .with_context(|| format!("Error validating scene {}", args.scene))?
    };

    let rendered = render_report(&report, &args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path))?;
            info!("Report written to {}", path);
        }
        None => println!("{}", rendered),
    }

    if args.archive {
        let uri = validator.archive(&report)?;
        info!("Validation result archived to {}", uri);
    }

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn looks_like_json(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

/// Render a report as `json`, `yaml` or `text`
pub fn render_report(report: &ValidationReport, format: &str) -> Result<String> {
    let rendered = match format {
        "text" => format_text_report(report),
        "yaml" => serde_yaml::to_string(report).context("Failed to render report as YAML")?,
        _ => serde_json::to_string_pretty(report)?,
    };
    Ok(rendered)
}

/// Human-readable rendering of a report
pub fn format_text_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let rule = "-".repeat(50);

    let _ = writeln!(out, "Scene Validation Results - {}", report.scene_id());
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Validation ID: {}", report.validation_id());
    let _ = writeln!(out, "Timestamp: {}", report.timestamp().to_rfc3339());
    let _ = writeln!(out, "Valid: {}", if report.is_valid() { "Yes" } else { "No" });

    if !report.errors().is_empty() {
        let _ = writeln!(out, "\nErrors:\n{}", rule);
        for (i, error) in report.errors().iter().enumerate() {
            let _ = writeln!(out, "{}. {}: {}", i + 1, error.error_code, error.error_message);
            if let Some(element_id) = &error.element_id {
                let _ = writeln!(out, "   Element: {}", element_id);
            }
            let _ = writeln!(out, "   Severity: {}", error.severity);
            if let Some(suggestion) = &error.suggestion {
                let _ = writeln!(out, "   Suggestion: {}", suggestion);
            }
            out.push('\n');
        }
    }

    if !report.warnings().is_empty() {
        let _ = writeln!(out, "\nWarnings:\n{}", rule);
        for (i, warning) in report.warnings().iter().enumerate() {
            let _ = writeln!(out, "{}. {}: {}", i + 1, warning.warning_code, warning.warning_message);
            if let Some(element_id) = &warning.element_id {
                let _ = writeln!(out, "   Element: {}", element_id);
            }
            if let Some(suggestion) = &warning.suggestion {
                let _ = writeln!(out, "   Suggestion: {}", suggestion);
            }
            out.push('\n');
        }
    }

    let metrics = report.metrics();
    if !metrics.is_empty() {
        let _ = writeln!(out, "\nPerformance Metrics:\n{}", rule);
        if let Some(count) = metrics.element_count {
            let _ = writeln!(out, "element_count: {}", count);
        }
        if let Some(score) = metrics.complexity_score {
            let _ = writeln!(out, "complexity_score: {}", score);
        }
    }

    let _ = write!(out, "\nValidation Time: {} ms", report.validation_time_ms());
    out
}
