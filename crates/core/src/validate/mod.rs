// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference validation for pipelines.
//!
//! Each pipeline is checked against the catalog of tasks visible to it:
//! - Task references (every referenced task or cluster task exists)
//! - Parameters (the pipeline declares every parameter a task needs)
//! - Workspaces (the pipeline declares every workspace a task binds or needs)
//!
//! The checks are independent. A pipeline with a dangling reference is still
//! checked for parameters and workspaces; those checks skip references that do
//! not resolve.

mod outliers;
mod params;
mod refs;
mod warnings;
mod workspaces;

pub use outliers::outliers;
pub use params::{required_params, validate_params};
pub use refs::validate_task_refs;
pub use warnings::{check_warnings, Warning};
pub use workspaces::{required_workspaces, validate_workspaces};

use crate::catalog::Catalog;
use crate::model::{Pipeline, PipelineTask};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Missing names keyed by pipeline task name
pub type MissingByTask = BTreeMap<String, Vec<String>>;

/// A failed check on a single pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Referenced tasks or cluster tasks that are not in the catalog
    #[error(
        "The following tasks/clusterTasks are used in {pipeline} pipeline but do not exist in the cluster: {}",
        bracketed(.missing)
    )]
    ReferenceMissing {
        pipeline: String,
        missing: Vec<String>,
    },
    /// Task parameters without a default that the pipeline never declares
    #[error("{pipeline} is missing the following params:\n{}", by_task(.missing))]
    ParamsMissing {
        pipeline: String,
        missing: MissingByTask,
    },
    /// Workspaces a task needs or binds that the pipeline never declares
    #[error("{pipeline} is missing the following workspaces:\n{}", by_task(.missing))]
    WorkspacesMissing {
        pipeline: String,
        missing: MissingByTask,
    },
}

impl ValidationError {
    pub fn pipeline(&self) -> &str {
        match self {
            ValidationError::ReferenceMissing { pipeline, .. }
            | ValidationError::ParamsMissing { pipeline, .. }
            | ValidationError::WorkspacesMissing { pipeline, .. } => pipeline,
        }
    }
}

fn bracketed(names: &[String]) -> String {
    format!("[{}]", names.join(" "))
}

fn by_task(missing: &MissingByTask) -> String {
    missing
        .iter()
        .map(|(task, names)| format!("  {}: {}", task, bracketed(names)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The individual checks run against a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    TaskRefs,
    Params,
    Workspaces,
}

impl Check {
    /// Every check, in the order reports list them
    pub const ALL: [Check; 3] = [Check::TaskRefs, Check::Params, Check::Workspaces];

    /// Heading used when rendering a failure of this check
    pub fn label(&self) -> &'static str {
        match self {
            Check::TaskRefs => "taskRef validation",
            Check::Params => "parameter validation",
            Check::Workspaces => "workspace validation",
        }
    }

    pub fn run(&self, pipeline: &Pipeline, catalog: &Catalog) -> Result<(), ValidationError> {
        match self {
            Check::TaskRefs => validate_task_refs(pipeline, catalog),
            Check::Params => validate_params(pipeline, catalog),
            Check::Workspaces => validate_workspaces(pipeline, catalog),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub check: Check,
    pub error: ValidationError,
}

/// Outcome of validating one pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub pipeline: String,
    pub namespace: Option<String>,
    pub failures: Vec<Failure>,
    pub warnings: Vec<Warning>,
}

impl PipelineReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure(&self, check: Check) -> Option<&ValidationError> {
        self.failures
            .iter()
            .find(|f| f.check == check)
            .map(|f| &f.error)
    }
}

/// Run every check against a pipeline
pub fn validate_pipeline(pipeline: &Pipeline, catalog: &Catalog) -> PipelineReport {
    validate_selected(pipeline, catalog, &Check::ALL)
}

/// Run the given checks against a pipeline.
///
/// Failures are reported in [`Check::ALL`] order whatever order `checks` is in.
pub fn validate_selected(pipeline: &Pipeline, catalog: &Catalog, checks: &[Check]) -> PipelineReport {
    let span = tracing::debug_span!("validate", pipeline = pipeline.name());
    let _guard = span.enter();

    let failures: Vec<Failure> = Check::ALL
        .iter()
        .filter(|check| checks.contains(check))
        .filter_map(|check| {
            check.run(pipeline, catalog).err().map(|error| Failure {
                check: *check,
                error,
            })
        })
        .collect();

    tracing::debug!(
        catalog_size = catalog.len(),
        failures = failures.len(),
        "checks complete"
    );

    PipelineReport {
        pipeline: pipeline.name().to_string(),
        namespace: pipeline.namespace().map(String::from),
        failures,
        warnings: check_warnings(pipeline, catalog),
    }
}

/// Collect per-task findings, dropping tasks with nothing missing
fn missing_by_task<F>(pipeline: &Pipeline, mut missing_for: F) -> MissingByTask
where
    F: FnMut(&PipelineTask) -> Vec<String>,
{
    let mut missing = MissingByTask::new();
    for task in pipeline.all_tasks() {
        let names = missing_for(task);
        if names.is_empty() {
            continue;
        }
        tracing::debug!(task = %task.name, missing = ?names, "task has unmet requirements");
        missing.entry(task.name.clone()).or_default().extend(names);
    }
    for names in missing.values_mut() {
        names.sort();
        names.dedup();
    }
    missing
}
