// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tkv - Tekton pipeline reference validator

mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::validate;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::TkvError;

/// Exit status when inputs cannot be read
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "tkv",
    version,
    about = "Validate Tekton pipelines against the tasks they reference"
)]
struct Cli {
    /// Configuration file (defaults to ./tkv.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check task references, parameters and workspaces of every pipeline
    Validate(validate::ValidateArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<TkvError>() {
                Some(tkv_err) => eprint!("{}", tkv_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::discover(cli.config.as_deref()).map_err(TkvError::invalid_config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Validate(args) => validate::handle(args, &config),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_env("TKV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
