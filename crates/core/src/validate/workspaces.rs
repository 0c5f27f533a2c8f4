// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace completeness and binding targets

use super::{missing_by_task, outliers, ValidationError};
use crate::catalog::Catalog;
use crate::model::{Pipeline, PipelineTask, WorkspaceBinding};

/// Ensure the pipeline declares every workspace its tasks need.
///
/// Workspaces marked optional at pipeline scope still count as declared.
/// Optionality only matters on the task side.
pub fn validate_workspaces(pipeline: &Pipeline, catalog: &Catalog) -> Result<(), ValidationError> {
    let declared: Vec<&str> = pipeline.workspace_names().collect();

    let missing = missing_by_task(pipeline, |task| {
        outliers(declared.iter().copied(), required_workspaces(task, catalog))
            .into_iter()
            .map(String::from)
            .collect()
    });

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::WorkspacesMissing {
            pipeline: pipeline.name().to_string(),
            missing,
        })
    }
}

/// Pipeline workspace names a pipeline task needs the pipeline to declare.
///
/// Every binding contributes its target (or its own name when unbound). A
/// required task workspace the pipeline task never binds must exist at
/// pipeline scope under the same name. Tasks with no catalog reference add
/// nothing.
pub fn required_workspaces<'a>(task: &'a PipelineTask, catalog: &'a Catalog) -> Vec<&'a str> {
    let Some((name, _)) = task.catalog_ref() else {
        return Vec::new();
    };

    let mut required = Vec::new();
    for entry in catalog.lookup(name) {
        let bound = task.workspaces.iter().map(|w| w.name.as_str());
        required.extend(outliers(bound, entry.required_workspaces()));
        required.extend(task.workspaces.iter().map(WorkspaceBinding::target));
    }
    required
}

#[cfg(test)]
#[path = "workspaces_tests.rs"]
mod tests;
