use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub struct CliOutput {
    pub stdout: String,
    #[allow(dead_code)]
    pub stderr: String,
    pub success: bool,
}

/// Runs the binary in script mode against an isolated home directory.
pub struct ScriptHarness {
    home: TempDir,
}

impl ScriptHarness {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("budget_tracker_cli").expect("binary exists");
        cmd.env("BUDGET_TRACKER_HOME", self.home.path())
            .env("BUDGET_TRACKER_CLI_SCRIPT", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, lines: &[&str]) -> CliOutput {
        let mut input = lines.join("\n");
        input.push('\n');
        let output = self
            .command()
            .write_stdin(input)
            .output()
            .expect("run scripted CLI");
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        }
    }
}
