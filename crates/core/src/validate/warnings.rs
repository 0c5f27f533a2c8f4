// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal advisories

use crate::catalog::Catalog;
use crate::model::Pipeline;
use serde::Serialize;

/// An advisory that never fails a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub pipeline: String,
    pub message: String,
}

/// Collect advisories for a pipeline.
///
/// No advisories are produced yet. Unused pipeline parameters and workspaces
/// are the intended first candidates.
pub fn check_warnings(_pipeline: &Pipeline, _catalog: &Catalog) -> Vec<Warning> {
    Vec::new()
}

#[cfg(test)]
#[path = "warnings_tests.rs"]
mod tests;
