//! Shared helpers for CLI specs

use assert_cmd::Command;
use similar_asserts::assert_eq;
use std::path::Path;
use tempfile::TempDir;

/// A scratch directory holding manifests
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// The CLI, run from the project directory with user config isolated
    pub fn tkv(&self) -> Cli {
        let mut cmd = Command::cargo_bin("tkv").unwrap();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env("HOME", self.dir.path())
            .env_remove("TKV_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    pub stdout: String,
    pub stderr: String,
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout does not contain {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr does not contain {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

pub const BUILD_TASK: &str = r#"
apiVersion: tekton.dev/v1beta1
kind: Task
metadata:
  name: build
spec:
  params:
    - name: image
    - name: context
      default: "."
  workspaces:
    - name: source
"#;

pub const GIT_CLONE: &str = r#"
apiVersion: tekton.dev/v1beta1
kind: ClusterTask
metadata:
  name: git-clone
spec:
  params:
    - name: url
  workspaces:
    - name: output
"#;

pub const RELEASE_PIPELINE: &str = r#"
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: release
spec:
  params:
    - name: repo-url
    - name: url
    - name: image
  workspaces:
    - name: shared
  tasks:
    - name: fetch
      taskRef:
        name: git-clone
        kind: ClusterTask
      params:
        - name: url
          value: $(params.repo-url)
      workspaces:
        - name: output
          workspace: shared
    - name: compile
      taskRef:
        name: build
      workspaces:
        - name: source
          workspace: shared
"#;

pub const BROKEN_PIPELINE: &str = r#"
apiVersion: tekton.dev/v1beta1
kind: Pipeline
metadata:
  name: broken
spec:
  tasks:
    - name: compile
      taskRef:
        name: build
      workspaces:
        - name: source
          workspace: scratch
    - name: lint
      taskRef:
        name: golangci-lint
"#;

/// A project with a passing and a failing pipeline in the default namespace
pub fn mixed_project() -> Project {
    let project = Project::empty();
    project.file("tekton/tasks/build.yaml", BUILD_TASK);
    project.file("tekton/tasks/git-clone.yaml", GIT_CLONE);
    project.file("tekton/pipelines/release.yaml", RELEASE_PIPELINE);
    project.file("tekton/pipelines/broken.yaml", BROKEN_PIPELINE);
    project
}
