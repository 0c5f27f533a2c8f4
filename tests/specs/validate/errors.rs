//! Validate specs for unreadable input

use crate::prelude::*;

#[test]
fn missing_path_exits_with_usage_error() {
    let project = Project::empty();

    project
        .tkv()
        .args(&["validate", "does-not-exist"])
        .exits(2)
        .stdout_eq("")
        .stderr_has("does-not-exist");
}

#[test]
fn malformed_manifest_names_the_file() {
    let project = Project::empty();
    project.file("bad.yaml", "kind: Pipeline\nmetadata: [unterminated\n");

    project
        .tkv()
        .args(&["validate"])
        .exits(2)
        .stderr_has("bad.yaml");
}

#[test]
fn pipeline_without_name_is_rejected() {
    let project = Project::empty();
    project.file(
        "nameless.yaml",
        "apiVersion: tekton.dev/v1beta1\nkind: Pipeline\nmetadata: {}\nspec: {}\n",
    );

    project
        .tkv()
        .args(&["validate"])
        .exits(2)
        .stderr_has("nameless.yaml");
}
