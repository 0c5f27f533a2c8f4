// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task reference integrity

use super::{outliers, ValidationError};
use crate::catalog::Catalog;
use crate::model::{Pipeline, PipelineTask, TaskKind};

/// Ensure every task and cluster task the pipeline references exists.
///
/// References are matched against the catalog entries of the same kind, so a
/// cluster task reference is not satisfied by a namespaced task of that name.
pub fn validate_task_refs(pipeline: &Pipeline, catalog: &Catalog) -> Result<(), ValidationError> {
    let (cluster_task_refs, task_refs): (Vec<_>, Vec<_>) = pipeline
        .all_tasks()
        .filter_map(PipelineTask::catalog_ref)
        .partition(|(_, kind)| *kind == TaskKind::ClusterTask);

    let mut missing = outliers(
        catalog.task_names(),
        task_refs.iter().map(|(name, _)| *name),
    );
    missing.extend(outliers(
        catalog.cluster_task_names(),
        cluster_task_refs.iter().map(|(name, _)| *name),
    ));

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort_unstable();
    missing.dedup();
    tracing::debug!(?missing, "unresolved task references");

    Err(ValidationError::ReferenceMissing {
        pipeline: pipeline.name().to_string(),
        missing: missing.into_iter().map(String::from).collect(),
    })
}

#[cfg(test)]
#[path = "refs_tests.rs"]
mod tests;
