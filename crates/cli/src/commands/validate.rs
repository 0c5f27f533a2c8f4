// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validate command

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tkv_core::{validate_selected, Check, PipelineReport};
use tkv_manifest::{load_paths, ManifestSet};

use crate::config::{ColorChoice, Config};
use crate::error::TkvError;
use crate::output::{self, OutputFormat};

/// Exit status when at least one pipeline failed a check
const EXIT_FAILED: u8 = 1;

#[derive(Args)]
pub struct ValidateArgs {
    /// Manifest files or directories to read
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Only validate pipelines in this namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Only validate pipelines with this name (repeatable)
    #[arg(short, long = "pipeline")]
    pub pipelines: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the configured color choice
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Skip a check (repeatable)
    #[arg(long, value_enum)]
    pub skip: Vec<CheckArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckArg {
    TaskRefs,
    Params,
    Workspaces,
}

impl From<CheckArg> for Check {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::TaskRefs => Check::TaskRefs,
            CheckArg::Params => Check::Params,
            CheckArg::Workspaces => Check::Workspaces,
        }
    }
}

pub fn handle(args: ValidateArgs, config: &Config) -> Result<ExitCode> {
    let mut manifests = load_paths(&args.paths).map_err(TkvError::manifests)?;
    manifests.apply_default_namespace(&config.default_namespace);

    let skipped: Vec<Check> = args.skip.iter().copied().map(Check::from).collect();
    let checks: Vec<Check> = config
        .checks
        .enabled()
        .into_iter()
        .filter(|check| !skipped.contains(check))
        .collect();
    tracing::debug!(?checks, "running checks");

    let reports = validate_all(&manifests, &args, &checks);

    configure_color(args.color.unwrap_or(config.color));
    print!("{}", output::render(args.format, &reports)?);

    if reports.iter().all(PipelineReport::passed) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_FAILED))
    }
}

fn validate_all(manifests: &ManifestSet, args: &ValidateArgs, checks: &[Check]) -> Vec<PipelineReport> {
    let mut reports = Vec::new();
    for (namespace, pipelines) in manifests.pipelines_by_namespace() {
        if let Some(wanted) = args.namespace.as_deref() {
            if namespace != Some(wanted) {
                continue;
            }
        }

        let selected: Vec<_> = pipelines
            .into_iter()
            .filter(|p| args.pipelines.is_empty() || args.pipelines.iter().any(|n| n == p.name()))
            .collect();
        if selected.is_empty() {
            continue;
        }

        // One catalog per namespace, shared by every pipeline in it
        let catalog = manifests.catalog_for(namespace);
        tracing::info!(
            namespace = namespace.unwrap_or("<none>"),
            pipelines = selected.len(),
            catalog_size = catalog.len(),
            "validating namespace"
        );
        for pipeline in selected {
            reports.push(validate_selected(pipeline, &catalog, checks));
        }
    }
    reports
}

fn configure_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}
