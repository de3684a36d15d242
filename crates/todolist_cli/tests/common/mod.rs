use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home directory so tests never touch real user state.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todolist").expect("binary should be built");
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Runs a command with `--json` and returns the `data` payload.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let assert = self.cmd().arg("--json").args(args).assert().success();
        let stdout =
            String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8");
        let value: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
        assert_eq!(value["ok"], Value::Bool(true));
        value["data"].clone()
    }

    /// Id of the default (first) project, as a string.
    pub fn default_project_id(&self) -> String {
        self.run_json(&["project", "list"])[0]["id"]
            .as_str()
            .expect("project id should be a string")
            .to_string()
    }

    pub fn state_file(&self) -> PathBuf {
        self.home
            .join(".local")
            .join("share")
            .join("todolist")
            .join("todo_projects.json")
    }
}
