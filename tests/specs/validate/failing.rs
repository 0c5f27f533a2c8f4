//! Validate specs for pipelines with unmet references

use crate::prelude::*;

#[test]
fn broken_pipeline_lists_every_failed_check() {
    let project = mixed_project();

    project
        .tkv()
        .args(&["validate", "tekton"])
        .fails()
        .stdout_eq(
            "broken has the following errors\n\
             taskRef validation error\n\
             The following tasks/clusterTasks are used in broken pipeline but do not exist in the cluster: [golangci-lint]\n\
             parameter validation error\n\
             broken is missing the following params:\n  compile: [image]\n\
             workspace validation error\n\
             broken is missing the following workspaces:\n  compile: [scratch]\n\
             release verified!\n",
        );
}

#[test]
fn task_ref_kind_must_match() {
    let project = Project::empty();
    project.file("tasks/git-clone.yaml", GIT_CLONE);
    project.file(
        "pipeline.yaml",
        r#"
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: fetch-only
spec:
  params:
    - name: url
  tasks:
    - name: fetch
      taskRef:
        name: git-clone
"#,
    );

    project
        .tkv()
        .args(&["validate"])
        .fails()
        .stdout_has("fetch-only has the following errors")
        .stdout_has("do not exist in the cluster: [git-clone]");
}

#[test]
fn tasks_in_other_namespaces_are_not_visible() {
    let project = Project::empty();
    project.file(
        "tasks/build.yaml",
        &BUILD_TASK.replace("name: build", "name: build\n  namespace: team-a"),
    );
    project.file(
        "pipeline.yaml",
        r#"
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: compile
  namespace: team-b
spec:
  tasks:
    - name: compile
      taskRef:
        name: build
"#,
    );

    project
        .tkv()
        .args(&["validate"])
        .fails()
        .stdout_has("do not exist in the cluster: [build]");
}

#[test]
fn skipped_checks_are_not_reported() {
    let project = mixed_project();

    project
        .tkv()
        .args(&["validate", "--skip", "params", "--skip", "workspaces"])
        .fails()
        .stdout_has("taskRef validation error")
        .stdout_lacks("parameter validation error")
        .stdout_lacks("workspace validation error");
}

#[test]
fn skipping_every_failed_check_passes() {
    let project = mixed_project();

    project
        .tkv()
        .args(&[
            "validate",
            "--skip",
            "task-refs",
            "--skip",
            "params",
            "--skip",
            "workspaces",
        ])
        .passes()
        .stdout_eq("broken verified!\nrelease verified!\n");
}
