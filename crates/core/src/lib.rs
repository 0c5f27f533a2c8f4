// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tkv-core: pipeline reference validation
//!
//! This crate provides:
//! - The pipeline and task model, deserializable from Tekton objects
//! - The task catalog visible to a pipeline
//! - Checks that every task reference resolves and that the pipeline declares
//!   the parameters and workspaces its tasks need

pub mod catalog;
pub mod model;
pub mod validate;

pub use catalog::Catalog;
pub use model::{
    ClusterTask, ObjectMeta, Param, ParamSpec, ParamType, ParamValue, Pipeline, PipelineSpec,
    PipelineTask, PipelineWorkspaceDeclaration, Task, TaskDefinition, TaskKind, TaskRef, TaskSpec,
    WorkspaceBinding, WorkspaceDeclaration,
};
pub use validate::{
    validate_params, validate_pipeline, validate_selected, validate_task_refs,
    validate_workspaces, Check, Failure, MissingByTask, PipelineReport, ValidationError, Warning,
};
