//! Validate specs for namespace and pipeline selection

use crate::prelude::*;

#[test]
fn pipeline_filter_selects_by_name() {
    let project = mixed_project();

    project
        .tkv()
        .args(&["validate", "--pipeline", "release"])
        .passes()
        .stdout_eq("release verified!\n");
}

#[test]
fn namespace_filter_excludes_other_namespaces() {
    let project = mixed_project();
    project.file(
        "tekton/pipelines/staging.yaml",
        &RELEASE_PIPELINE.replace("name: release", "name: staging\n  namespace: staging"),
    );

    project
        .tkv()
        .args(&["validate", "-n", "default"])
        .fails()
        .stdout_lacks("staging");
}

#[test]
fn namespace_without_pipelines_finds_none() {
    let project = mixed_project();

    project
        .tkv()
        .args(&["validate", "--namespace", "nowhere"])
        .passes()
        .stdout_eq("No pipelines found\n");
}
