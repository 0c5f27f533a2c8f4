// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest loading from files and directories.
//!
//! Directories are walked recursively. Only `.yaml`, `.yml` and `.json` files
//! are read, hidden entries below the given root are skipped, and symlinked
//! directories are not followed. Files are visited in sorted order so repeated
//! runs see resources in the same order.

use crate::parser::{parse_manifests, ParseError, Resource};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tkv_core::{Catalog, ClusterTask, Pipeline, Task};

const MANIFEST_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Errors that can occur while loading manifests
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Every pipeline, task and cluster task found in a set of manifests
#[derive(Debug, Clone, Default)]
pub struct ManifestSet {
    pub pipelines: Vec<Pipeline>,
    pub tasks: Vec<Task>,
    pub cluster_tasks: Vec<ClusterTask>,
}

impl ManifestSet {
    pub fn add(&mut self, resource: Resource) {
        match resource {
            Resource::Pipeline(pipeline) => self.pipelines.push(pipeline),
            Resource::Task(task) => self.tasks.push(task),
            Resource::ClusterTask(task) => self.cluster_tasks.push(task),
        }
    }

    /// Put namespaced objects that carry no namespace into `namespace`
    pub fn apply_default_namespace(&mut self, namespace: &str) {
        let metadata = self
            .pipelines
            .iter_mut()
            .map(|p| &mut p.metadata)
            .chain(self.tasks.iter_mut().map(|t| &mut t.metadata));
        for meta in metadata {
            if meta.namespace.is_none() {
                meta.namespace = Some(namespace.to_string());
            }
        }
    }

    /// Tasks in `namespace` plus every cluster task
    pub fn catalog_for(&self, namespace: Option<&str>) -> Catalog {
        let tasks = self
            .tasks
            .iter()
            .filter(|t| t.namespace() == namespace)
            .cloned()
            .collect();
        Catalog::new(tasks, self.cluster_tasks.clone())
    }

    /// Pipelines grouped by namespace, sorted by name within each group
    pub fn pipelines_by_namespace(&self) -> BTreeMap<Option<&str>, Vec<&Pipeline>> {
        let mut grouped: BTreeMap<Option<&str>, Vec<&Pipeline>> = BTreeMap::new();
        for pipeline in &self.pipelines {
            grouped
                .entry(pipeline.namespace())
                .or_default()
                .push(pipeline);
        }
        for pipelines in grouped.values_mut() {
            pipelines.sort_by(|a, b| a.name().cmp(b.name()));
        }
        grouped
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty() && self.tasks.is_empty() && self.cluster_tasks.is_empty()
    }
}

/// Load every manifest under the given files and directories
pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> Result<ManifestSet, LoadError> {
    let mut set = ManifestSet::default();
    for path in paths {
        for file in manifest_files(path.as_ref())? {
            for resource in load_file(&file)? {
                set.add(resource);
            }
        }
    }
    tracing::info!(
        pipelines = set.pipelines.len(),
        tasks = set.tasks.len(),
        cluster_tasks = set.cluster_tasks.len(),
        "manifests loaded"
    );
    Ok(set)
}

/// Parse the Tekton resources in a single file
pub fn load_file(path: &Path) -> Result<Vec<Resource>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let resources = parse_manifests(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let kinds: Vec<&str> = resources.iter().map(Resource::kind).collect();
    tracing::debug!(path = %path.display(), ?kinds, "parsed manifest");
    Ok(resources)
}

/// Manifest files at `path`, in sorted order.
///
/// A file given directly is returned whatever its extension.
pub fn manifest_files(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    walk(path, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        // Symlinked directories are not followed, so link cycles cannot recurse
        let file_type = entry.file_type().map_err(io_error)?;
        if file_type.is_dir() {
            walk(&path, files)?;
        } else if is_manifest(&path) && path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
