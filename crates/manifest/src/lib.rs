// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Reading pipelines and tasks from exported manifest files

mod loader;
mod parser;

pub use loader::{load_file, load_paths, manifest_files, LoadError, ManifestSet};
pub use parser::{parse_manifests, ParseError, Resource};
