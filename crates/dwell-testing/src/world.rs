//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use dwell_index::Database;
use dwell_runtime::{Config, Workspace};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp data directory the CLI runs against.
///
/// # Example
/// ```no_run
/// use dwell_testing::TestWorld;
///
/// let world = TestWorld::new().initialized();
/// let result = world.run(&["report", "list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty environment. Nothing is initialized yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".dwell");

        Self {
            temp_dir,
            data_dir,
        }
    }

    /// Initialize the workspace in-process (same as `dwell init`).
    pub fn initialized(self) -> Self {
        Workspace::init(&self.data_dir, None, false).expect("Failed to initialize workspace");
        self
    }

    /// Initialize with a custom configuration written first.
    pub fn with_config(self, config: &Config) -> Self {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        config
            .save_to(&self.config_path())
            .expect("Failed to write config");
        self.initialized()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Workspace::CONFIG_FILE)
    }

    /// Open the workspace database for seeding or inspection.
    pub fn database(&self) -> Result<Database> {
        let config = Config::load_from(&self.config_path())?;
        Ok(Database::open(&config.database_path(&self.data_dir))?)
    }

    /// Point a CLI command at this environment's data dir, without color.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("DWELL_PATH");
        cmd
    }

    /// Run the `dwell` binary with `args` in this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("dwell")
            .map_err(|e| anyhow::anyhow!("Failed to find dwell binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` appended and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--format", "json"]);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("dwell {:?} failed: {}", args, result.stderr);
        }
        result.json()
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
