//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory holding its config file, so tests
//! never read or write the user's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `pubassist` binary.
///
/// # Example
/// ```no_run
/// use pubassist_testing::TestWorld;
///
/// let world = TestWorld::new().with_api_url("http://127.0.0.1:9");
/// let result = world.run(&["strip", "--page", "3", "--items", "35"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("pubassist").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw TOML to the world's config file.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Point the CLI at `url` through `PUBASSIST_API_URL`.
    pub fn with_api_url(self, url: &str) -> Self {
        self.with_env("PUBASSIST_API_URL", url)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this world's config file and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());

        for key in ["PUBASSIST_CONFIG", "PUBASSIST_API_URL", "PUBASSIST_LOG", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `pubassist` binary with `args` in this world.
    ///
    /// Requires the binary to be built; cargo does this for integration
    /// tests of the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pubassist")
            .map_err(|e| anyhow::anyhow!("Failed to find pubassist binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Like [`run`](Self::run), feeding `input` on stdin.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pubassist")
            .map_err(|e| anyhow::anyhow!("Failed to find pubassist binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(input.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
