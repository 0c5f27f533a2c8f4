// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task catalog visible to a pipeline

use crate::model::{ClusterTask, Task, TaskDefinition};

/// Tasks visible in one namespace plus every cluster task.
///
/// A catalog is a snapshot. It is assembled once per namespace and never
/// modified while pipelines are validated against it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tasks: Vec<Task>,
    pub cluster_tasks: Vec<ClusterTask>,
}

impl Catalog {
    pub fn new(tasks: Vec<Task>, cluster_tasks: Vec<ClusterTask>) -> Self {
        Self {
            tasks,
            cluster_tasks,
        }
    }

    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name())
    }

    pub fn cluster_task_names(&self) -> impl Iterator<Item = &str> {
        self.cluster_tasks.iter().map(|t| t.name())
    }

    /// Every entry regardless of kind, cluster tasks first
    pub fn entries(&self) -> impl Iterator<Item = &dyn TaskDefinition> {
        self.cluster_tasks
            .iter()
            .map(|t| t as &dyn TaskDefinition)
            .chain(self.tasks.iter().map(|t| t as &dyn TaskDefinition))
    }

    /// Entries named `name`, of either kind
    pub fn lookup(&self, name: &str) -> Vec<&dyn TaskDefinition> {
        self.entries().filter(|entry| entry.name() == name).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len() + self.cluster_tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
