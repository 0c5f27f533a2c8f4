//! Validate specs for pipelines that pass every check

use crate::prelude::*;

#[test]
fn complete_pipeline_is_verified() {
    let project = Project::empty();
    project.file("tasks/build.yaml", BUILD_TASK);
    project.file("tasks/git-clone.yaml", GIT_CLONE);
    project.file("pipelines/release.yaml", RELEASE_PIPELINE);

    project
        .tkv()
        .args(&["validate"])
        .passes()
        .stdout_eq("release verified!\n");
}

#[test]
fn multi_document_file_is_read() {
    let project = Project::empty();
    let combined = format!("{}\n---\n{}\n---\n{}", BUILD_TASK, GIT_CLONE, RELEASE_PIPELINE);
    project.file("all.yaml", &combined);

    project
        .tkv()
        .args(&["validate", "all.yaml"])
        .passes()
        .stdout_eq("release verified!\n");
}

#[test]
fn no_pipelines_found() {
    let project = Project::empty();
    project.file("tasks/build.yaml", BUILD_TASK);

    project
        .tkv()
        .args(&["validate"])
        .passes()
        .stdout_eq("No pipelines found\n");
}

#[test]
fn non_tekton_documents_are_ignored() {
    let project = Project::empty();
    project.file("tasks/build.yaml", BUILD_TASK);
    project.file("tasks/git-clone.yaml", GIT_CLONE);
    project.file("pipelines/release.yaml", RELEASE_PIPELINE);
    project.file(
        "deploy/service.yaml",
        "apiVersion: v1\nkind: Service\nmetadata:\n  name: web\n",
    );
    project.file(".github/workflows/ci.yml", "on: push\njobs: {}\n");

    project
        .tkv()
        .args(&["validate"])
        .passes()
        .stdout_eq("release verified!\n");
}

#[test]
fn remote_references_and_unquoted_values_are_accepted() {
    let project = Project::empty();
    project.file("tasks/build.yaml", BUILD_TASK);
    project.file(
        "pipeline.yaml",
        r#"
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: remote-release
spec:
  params:
    - name: image
    - name: retries
      default: 3
  workspaces:
    - name: shared
  tasks:
    - name: fetch
      taskRef:
        resolver: git
        params:
          - name: pathInRepo
            value: task/git-clone/0.9/git-clone.yaml
      params:
        - name: depth
          value: 1
    - name: compile
      taskRef:
        name: build
      workspaces:
        - name: source
          workspace: shared
"#,
    );

    project
        .tkv()
        .args(&["validate"])
        .passes()
        .stdout_eq("remote-release verified!\n");
}
