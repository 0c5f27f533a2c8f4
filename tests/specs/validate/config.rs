//! Validate specs for configuration files

use crate::prelude::*;

#[test]
fn project_config_disables_checks() {
    let project = mixed_project();
    project.file(
        "tkv.toml",
        "[checks]\ntask_refs = false\nparams = false\nworkspaces = false\n",
    );

    project
        .tkv()
        .args(&["validate"])
        .passes()
        .stdout_eq("broken verified!\nrelease verified!\n");
}

#[test]
fn default_namespace_comes_from_config() {
    let project = mixed_project();
    project.file("tkv.toml", "default_namespace = \"ci\"\n");

    let run = project
        .tkv()
        .args(&["validate", "--format", "json", "--namespace", "ci"])
        .fails();
    assert_eq!(run.json()[1]["namespace"], "ci");
}

#[test]
fn explicit_config_wins_over_project_config() {
    let project = mixed_project();
    project.file("tkv.toml", "[checks]\nparams = false\n");
    project.file("strict.toml", "");

    let path = project.path().join("strict.toml");
    project
        .tkv()
        .args(&["--config", path.to_str().unwrap(), "validate"])
        .fails()
        .stdout_has("parameter validation error");
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_is_read_from_config_home() {
    let project = mixed_project();
    project.file(".config/tkv/config.toml", "[checks]\nworkspaces = false\n");

    project
        .tkv()
        .args(&["validate"])
        .fails()
        .stdout_lacks("workspace validation error");
}

#[test]
fn invalid_config_is_reported() {
    let project = mixed_project();
    project.file("tkv.toml", "unknown_key = true\n");

    project
        .tkv()
        .args(&["validate"])
        .exits(2)
        .stderr_has("tkv.toml");
}
