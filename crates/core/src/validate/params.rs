// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter completeness

use super::{missing_by_task, outliers, ValidationError};
use crate::catalog::Catalog;
use crate::model::{Pipeline, PipelineTask};

/// Ensure the pipeline declares every parameter its tasks need.
///
/// Only parameters declared at pipeline scope count. A task parameter with a
/// default never needs to be declared.
pub fn validate_params(pipeline: &Pipeline, catalog: &Catalog) -> Result<(), ValidationError> {
    let declared: Vec<&str> = pipeline.param_names().collect();

    let missing = missing_by_task(pipeline, |task| {
        outliers(declared.iter().copied(), required_params(task, catalog))
            .into_iter()
            .map(String::from)
            .collect()
    });

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ParamsMissing {
            pipeline: pipeline.name().to_string(),
            missing,
        })
    }
}

/// Parameters without a default on the task a pipeline task references.
///
/// Entries are matched by name only. Inline tasks, resolver or bundle
/// references, and references that match no entry need nothing.
pub fn required_params<'a>(task: &PipelineTask, catalog: &'a Catalog) -> Vec<&'a str> {
    let Some((name, _)) = task.catalog_ref() else {
        return Vec::new();
    };
    catalog
        .lookup(name)
        .into_iter()
        .flat_map(|entry| entry.required_params())
        .collect()
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
