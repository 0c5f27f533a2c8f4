// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for validation reports

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;
use tkv_core::{Check, PipelineReport, ValidationError, Warning};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(format: OutputFormat, reports: &[PipelineReport]) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// One summary per pipeline, with an error block per failed check
pub fn render_text(reports: &[PipelineReport]) -> String {
    if reports.is_empty() {
        return "No pipelines found\n".to_string();
    }

    let mut out = String::new();
    for report in reports {
        if report.passed() {
            let _ = writeln!(out, "{}", format!("{} verified!", report.pipeline).green());
        } else {
            let _ = writeln!(
                out,
                "{}",
                format!("{} has the following errors", report.pipeline).yellow()
            );
            for failure in &report.failures {
                let _ = writeln!(out, "{}", format!("{} error", failure.check).red());
                let _ = writeln!(out, "{}", failure.error);
            }
        }
        for warning in &report.warnings {
            let _ = writeln!(out, "{} {}", "warning:".yellow(), warning.message);
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    pipeline: &'a str,
    namespace: Option<&'a str>,
    passed: bool,
    failures: Vec<JsonFailure<'a>>,
    warnings: &'a [Warning],
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    check: Check,
    message: String,
    error: &'a ValidationError,
}

pub fn render_json(reports: &[PipelineReport]) -> Result<String, serde_json::Error> {
    let reports: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| JsonReport {
            pipeline: &report.pipeline,
            namespace: report.namespace.as_deref(),
            passed: report.passed(),
            failures: report
                .failures
                .iter()
                .map(|failure| JsonFailure {
                    check: failure.check,
                    message: failure.error.to_string(),
                    error: &failure.error,
                })
                .collect(),
            warnings: &report.warnings,
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&reports)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
