// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors that stop a run before any pipeline is validated (unreadable
//! manifests, a broken config file) are shown with:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use crate::config::ConfigError;
use std::error::Error as _;
use std::fmt;
use tkv_manifest::LoadError;

/// A run-stopping failure with what to check and how to recover.
#[derive(Debug)]
pub struct TkvError {
    message: String,
    context: Vec<String>,
    suggestions: Vec<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TkvError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TkvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for TkvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures a run can stop on.
impl TkvError {
    /// Error for manifests that cannot be found, read or parsed.
    pub fn manifests(err: LoadError) -> Self {
        let tkv_err = match &err {
            LoadError::NotFound(path) => {
                TkvError::new(format!("Path '{}' not found", path.display()))
                    .with_suggestion("Pass the files or directories holding your exported manifests")
                    .with_suggestion(
                        "Export them with: kubectl get pipelines,tasks,clustertasks -A -o yaml > tekton.yaml",
                    )
            }
            LoadError::Io { path, source } => {
                TkvError::new(format!("Failed to read '{}'", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion("Check that the file is readable")
            }
            LoadError::Parse { path, source } => {
                let mut tkv_err = TkvError::new(format!("Failed to parse '{}'", path.display()))
                    .with_context(source.to_string());
                if let Some(cause) = source.source() {
                    tkv_err = tkv_err.with_context(cause.to_string());
                }
                tkv_err.with_suggestion("Check that the file holds valid YAML or JSON documents")
            }
        };
        tkv_err.with_source(err)
    }

    /// Error for a configuration file that cannot be used.
    pub fn invalid_config(err: ConfigError) -> Self {
        TkvError::new(format!("Invalid configuration in '{}'", err.path().display()))
            .with_context(err.to_string())
            .with_suggestion("Fix or remove the file, or pass another with --config")
            .with_source(err)
    }
}
