// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest parsing.
//!
//! A manifest is one or more YAML (or JSON) documents as produced by
//! `kubectl get -o yaml`. Tekton pipelines, tasks and cluster tasks are
//! decoded into the validation model; every other document is skipped.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;
use tkv_core::{ClusterTask, Pipeline, Task};

const TEKTON_GROUP: &str = "tekton.dev/";

/// Errors that can occur during manifest parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("document {document}: {kind} is missing metadata.name")]
    MissingName { document: usize, kind: String },
    #[error("invalid {kind} '{name}': {source}")]
    InvalidResource {
        kind: String,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A Tekton object relevant to validation
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Pipeline(Pipeline),
    Task(Task),
    ClusterTask(ClusterTask),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Pipeline(_) => "Pipeline",
            Resource::Task(_) => "Task",
            Resource::ClusterTask(_) => "ClusterTask",
        }
    }
}

/// Parse every Tekton resource out of a (multi-document) manifest.
///
/// `List` documents are flattened through their `items`.
pub fn parse_manifests(content: &str) -> Result<Vec<Resource>, ParseError> {
    let mut resources = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = Value::deserialize(document)?;
        collect(&value, index, &mut resources)?;
    }
    Ok(resources)
}

fn collect(value: &Value, document: usize, out: &mut Vec<Resource>) -> Result<(), ParseError> {
    if !value.is_mapping() {
        return Ok(());
    }

    let Some(kind) = value.get("kind").and_then(Value::as_str) else {
        tracing::debug!(document, "skipping document without kind");
        return Ok(());
    };

    if kind == "List" || kind.ends_with("List") {
        if let Some(items) = value.get("items").and_then(Value::as_sequence) {
            for item in items {
                collect(item, document, out)?;
            }
        }
        return Ok(());
    }

    let api_version = value
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if !api_version.starts_with(TEKTON_GROUP) {
        tracing::debug!(document, kind, api_version, "skipping non-Tekton document");
        return Ok(());
    }

    if !matches!(kind, "Pipeline" | "Task" | "ClusterTask") {
        tracing::debug!(document, kind, "skipping unsupported Tekton kind");
        return Ok(());
    }

    let name = value
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::MissingName {
            document,
            kind: kind.to_string(),
        })?;

    let resource = match kind {
        "Pipeline" => Resource::Pipeline(decode(value, kind, name)?),
        "Task" => Resource::Task(decode(value, kind, name)?),
        _ => Resource::ClusterTask(decode(value, kind, name)?),
    };
    out.push(resource);
    Ok(())
}

fn decode<T: DeserializeOwned>(value: &Value, kind: &str, name: &str) -> Result<T, ParseError> {
    serde_yaml::from_value(value.clone()).map_err(|source| ParseError::InvalidResource {
        kind: kind.to_string(),
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
