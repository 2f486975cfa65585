//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use twcolors::constants::{CONFIG_DIR_ENV, CONFIG_FILE_NAME, HISTORY_FILE_NAME};

/// Path to the twcolors binary (set by cargo at compile time)
pub fn twcolors_bin() -> &'static str {
    env!("CARGO_BIN_EXE_twcolors")
}

/// Creates an empty config directory for one test.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to every command of a test so they share the
/// saved selection and history. `NO_COLOR` keeps output free of escapes.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(twcolors_bin());
    cmd.env(CONFIG_DIR_ENV, config_dir);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs an isolated command and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs an isolated command, asserts success and returns stdout.
pub fn run_ok(args: &[&str], config_dir: &Path) -> String {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "`twcolors {}` should succeed. stderr: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Runs an isolated command with `--json` output and parses it.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let stdout = run_ok(args, config_dir);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Path of the config file inside a test config directory.
pub fn config_file(config_dir: &Path) -> std::path::PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Path of the history file inside a test config directory.
pub fn history_file(config_dir: &Path) -> std::path::PathBuf {
    config_dir.join(HISTORY_FILE_NAME)
}
