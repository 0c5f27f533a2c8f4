// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file handling.
//!
//! Lookup order: an explicit `--config` path, `./tkv.toml`, then
//! `<user config dir>/tkv/config.toml`. With none present the defaults apply.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tkv_core::Check;

pub const PROJECT_CONFIG: &str = "tkv.toml";
const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io { path, .. } | ConfigError::Toml { path, .. } => path,
        }
    }
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Which checks run by default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksConfig {
    pub task_refs: bool,
    pub params: bool,
    pub workspaces: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            task_refs: true,
            params: true,
            workspaces: true,
        }
    }
}

impl ChecksConfig {
    pub fn enabled(&self) -> Vec<Check> {
        Check::ALL
            .into_iter()
            .filter(|check| match check {
                Check::TaskRefs => self.task_refs,
                Check::Params => self.params,
                Check::Workspaces => self.workspaces,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Namespace for pipelines and tasks that do not name one
    pub default_namespace: String,
    pub color: ColorChoice,
    pub checks: ChecksConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            color: ColorChoice::default(),
            checks: ChecksConfig::default(),
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the first configuration found, or the defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let user_dir = dirs::config_dir().map(|dir| dir.join("tkv"));
        Self::discover_in(explicit, &cwd, user_dir.as_deref())
    }

    fn discover_in(
        explicit: Option<&Path>,
        cwd: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = std::iter::once(cwd.join(PROJECT_CONFIG))
            .chain(user_dir.map(|dir| dir.join("config.toml")));
        for candidate in candidates {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "using config file");
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
