// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline and task definitions.
//!
//! These types mirror the `tekton.dev/v1beta1` object shape closely enough to
//! deserialize exported manifests directly. Only the fields that take part in
//! reference validation are modelled; everything else (steps, `runAfter`,
//! `when` expressions, results) is ignored on input.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Object metadata shared by every resource kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ObjectMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }
}

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Array,
    Object,
}

/// A parameter value: a default on a declaration, or a binding expression.
///
/// Values are carried as-is. Their content is never interpreted.
///
/// Unquoted YAML numbers and booleans are kept as their text, so `8080` and
/// `"8080"` read the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(#[serde(deserialize_with = "scalar")] String),
    Array(#[serde(deserialize_with = "scalars")] Vec<String>),
    Object(#[serde(deserialize_with = "scalar_map")] BTreeMap<String, String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Unsigned(u) => u.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalars<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(values.into_iter().map(String::from).collect())
}

fn scalar_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let values = BTreeMap::<String, Scalar>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|(k, v)| (k, v.into())).collect())
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

/// A parameter declaration on a pipeline or a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<ParamType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
}

impl ParamSpec {
    /// A parameter with no default, which callers must supply
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
            default: Some(default.into()),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A workspace declared by a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub optional: bool,
}

impl WorkspaceDeclaration {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mount_path: None,
            read_only: false,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(name)
        }
    }
}

/// A workspace slot declared at pipeline scope.
///
/// `optional` is kept for completeness. It never exempts a pipeline from
/// declaring a slot a task needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineWorkspaceDeclaration {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
}

impl PipelineWorkspaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }
}

/// Kind of catalog entry a task reference points at.
///
/// Anything other than `ClusterTask` (including an absent kind) is a `Task`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskKind {
    #[default]
    Task,
    ClusterTask,
}

impl From<String> for TaskKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "ClusterTask" => TaskKind::ClusterTask,
            _ => TaskKind::Task,
        }
    }
}

impl From<TaskKind> for String {
    fn from(kind: TaskKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Task => write!(f, "Task"),
            TaskKind::ClusterTask => write!(f, "ClusterTask"),
        }
    }
}

/// Reference from a pipeline task to a catalog entry.
///
/// Resolver and bundle references carry no `name`. Those are fetched remotely
/// and never looked up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: TaskKind,
}

impl TaskRef {
    pub fn task(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: TaskKind::Task,
        }
    }

    pub fn cluster_task(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: TaskKind::ClusterTask,
        }
    }

    /// A resolver or bundle reference
    pub fn remote() -> Self {
        Self {
            name: None,
            kind: TaskKind::Task,
        }
    }
}

/// A parameter binding on a pipeline task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

/// Binds a task-side workspace name to a pipeline workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceBinding {
    /// Workspace name as the task declares it
    pub name: String,
    /// Pipeline workspace it is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
}

impl WorkspaceBinding {
    pub fn new(name: impl Into<String>, workspace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workspace: Some(workspace.into()),
            sub_path: None,
        }
    }

    /// A binding with no target, implicitly bound by name
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workspace: None,
            sub_path: None,
        }
    }

    /// Pipeline workspace this binding resolves to
    pub fn target(&self) -> &str {
        match self.workspace.as_deref() {
            Some(workspace) if !workspace.is_empty() => workspace,
            _ => &self.name,
        }
    }
}

/// One invocation of a task inside a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTask {
    pub name: String,
    /// `None` for inline task specs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_ref: Option<TaskRef>,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceBinding>,
}

impl PipelineTask {
    /// An inline pipeline task with no catalog reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task_ref: None,
            params: Vec::new(),
            workspaces: Vec::new(),
        }
    }

    pub fn referencing(name: impl Into<String>, task_ref: TaskRef) -> Self {
        Self {
            task_ref: Some(task_ref),
            ..Self::new(name)
        }
    }

    /// Catalog name and kind this task resolves through.
    ///
    /// `None` for inline specs and remote references, which no check looks up.
    pub fn catalog_ref(&self) -> Option<(&str, TaskKind)> {
        let task_ref = self.task_ref.as_ref()?;
        let name = task_ref.name.as_deref()?;
        Some((name, task_ref.kind))
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.push(Param {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_workspace(mut self, binding: WorkspaceBinding) -> Self {
        self.workspaces.push(binding);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default)]
    pub params: Vec<ParamSpec>,
    #[serde(default)]
    pub workspaces: Vec<PipelineWorkspaceDeclaration>,
    #[serde(default)]
    pub tasks: Vec<PipelineTask>,
    #[serde(default)]
    pub finally: Vec<PipelineTask>,
}

/// A pipeline definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PipelineSpec,
}

impl Pipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::named(name),
            spec: PipelineSpec::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    /// Tasks from the main list followed by the `finally` list
    pub fn all_tasks(&self) -> impl Iterator<Item = &PipelineTask> {
        self.spec.tasks.iter().chain(self.spec.finally.iter())
    }

    /// Names of parameters declared at pipeline scope
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.spec.params.iter().map(|p| p.name.as_str())
    }

    /// Names of workspaces declared at pipeline scope
    pub fn workspace_names(&self) -> impl Iterator<Item = &str> {
        self.spec.workspaces.iter().map(|w| w.name.as_str())
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.spec.params.push(param);
        self
    }

    pub fn with_workspace(mut self, name: impl Into<String>) -> Self {
        self.spec
            .workspaces
            .push(PipelineWorkspaceDeclaration::new(name));
        self
    }

    pub fn with_task(mut self, task: PipelineTask) -> Self {
        self.spec.tasks.push(task);
        self
    }

    pub fn with_finally(mut self, task: PipelineTask) -> Self {
        self.spec.finally.push(task);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceDeclaration>,
}

/// Read-only view shared by namespaced tasks and cluster tasks
pub trait TaskDefinition {
    fn name(&self) -> &str;
    fn params(&self) -> &[ParamSpec];
    fn workspaces(&self) -> &[WorkspaceDeclaration];

    /// Parameters with no default value
    fn required_params(&self) -> Vec<&str> {
        self.params()
            .iter()
            .filter(|p| !p.has_default())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Workspaces not marked optional
    fn required_workspaces(&self) -> Vec<&str> {
        self.workspaces()
            .iter()
            .filter(|w| !w.optional)
            .map(|w| w.name.as_str())
            .collect()
    }
}

macro_rules! task_definition {
    ($ty:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $ty {
            pub metadata: ObjectMeta,
            #[serde(default)]
            pub spec: TaskSpec,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    metadata: ObjectMeta::named(name),
                    spec: TaskSpec::default(),
                }
            }

            pub fn with_param(mut self, param: ParamSpec) -> Self {
                self.spec.params.push(param);
                self
            }

            pub fn with_workspace(mut self, workspace: WorkspaceDeclaration) -> Self {
                self.spec.workspaces.push(workspace);
                self
            }
        }

        impl TaskDefinition for $ty {
            fn name(&self) -> &str {
                &self.metadata.name
            }

            fn params(&self) -> &[ParamSpec] {
                &self.spec.params
            }

            fn workspaces(&self) -> &[WorkspaceDeclaration] {
                &self.spec.workspaces
            }
        }
    };
}

task_definition!(Task);
task_definition!(ClusterTask);

impl Task {
    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
