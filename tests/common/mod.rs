//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// A scratch directory holding a data file and an isolated config home.
pub struct Session {
    temp_dir: TempDir,
    pub data_path: PathBuf,
}

/// Captured outcome of one `weekly-cases` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let data_path = temp_dir.path().join("data").join("data.json");
        Self {
            temp_dir,
            data_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Seed the data file with raw contents.
    pub fn seed(&self, contents: &str) {
        if let Some(parent) = self.data_path.parent() {
            std::fs::create_dir_all(parent).expect("create data dir");
        }
        std::fs::write(&self.data_path, contents).expect("seed data file");
    }

    pub fn read_data(&self) -> String {
        std::fs::read_to_string(&self.data_path).expect("read data file")
    }

    pub fn data_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_data()).expect("parse data file")
    }

    /// Run against this session's data file, feeding `input` on stdin.
    pub fn run(&self, input: &str) -> RunResult {
        let data = self.data_path.display().to_string();
        self.run_with_args(&["--data", data.as_str()], input)
    }

    /// Run with explicit arguments; the user config dir points into the session.
    pub fn run_with_args(&self, args: &[&str], input: &str) -> RunResult {
        let config_home = self.root().join("config-home");
        let mut child = Command::new(env!("CARGO_BIN_EXE_weekly-cases"))
            .args(args)
            .current_dir(self.root())
            .env("XDG_CONFIG_HOME", &config_home)
            .env("HOME", self.root())
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn weekly-cases");
        let mut stdin = child.stdin.take().expect("stdin handle");
        // The binary may exit early (invalid date) and close its end first.
        if let Err(err) = stdin.write_all(input.as_bytes()) {
            assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {err}");
        }
        drop(stdin);
        let output = child.wait_with_output().expect("wait for weekly-cases");
        RunResult {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
