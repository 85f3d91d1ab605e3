//! Acceptance test harness for sdsgroup
//!
//! Each test gets its own [`AcceptanceContext`], i.e. its own state file, so
//! tests can run in parallel against the same organization.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

#[allow(deprecated)]
use assert_cmd::cargo::cargo_bin;
use tempfile::TempDir;

pub mod group_tests;

/// Prefix for groups created by acceptance tests
pub const TEST_RESOURCE_PREFIX: &str = "sdsgroup-acctest";

/// Attempts made by [`retry`] before giving up
pub const RETRY_ATTEMPTS: u32 = 10;

/// Pause between [`retry`] attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Isolated working area for one acceptance test
pub struct AcceptanceContext {
    dir: TempDir,
    binary_path: PathBuf,
}

impl AcceptanceContext {
    /// Create a context, panicking with a hint when credentials are missing.
    pub fn new() -> Self {
        for key in ["DD_API_KEY", "DD_APP_KEY"] {
            if env::var(key).map(|v| v.is_empty()).unwrap_or(true) {
                panic!("{} must be set to run acceptance tests", key);
            }
        }

        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
            binary_path: cargo_bin!("sdsgroup").to_path_buf(),
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    /// Write a desired-configuration file and return its path
    pub fn write_group_file(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("group.yaml");
        std::fs::write(&path, contents).expect("failed to write group file");
        path
    }

    /// Build a command bound to this context's state file.
    ///
    /// Credentials and host come from the environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.dir.path().join("config.yaml"))
            .arg("--state")
            .arg(self.state_path())
            .args(args);
        cmd
    }

    pub fn output(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Execute command and expect success, returning stdout as String.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.output(args);
        if !output.status.success() {
            panic!(
                "Command failed: sdsgroup {}\nstderr: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute command and expect failure, returning stderr as String.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.output(args);
        if output.status.success() {
            panic!("Command unexpectedly succeeded: sdsgroup {}", args.join(" "));
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Id of the group recorded in the state file
    pub fn managed_id(&self) -> Option<String> {
        let contents = std::fs::read_to_string(self.state_path()).ok()?;
        let state: serde_json::Value = serde_json::from_str(&contents).ok()?;
        state["id"].as_str().map(str::to_string)
    }

    /// Check that `id` no longer exists remotely, allowing for propagation delay
    pub fn assert_destroyed(&self, id: &str) {
        let probe = AcceptanceContext::new();
        let gone = retry(RETRY_ATTEMPTS, RETRY_DELAY, || {
            let output = probe.output(&["import", id]);
            if output.status.success() {
                // Imported after all; release it so the next attempt can retry
                let _ = std::fs::remove_file(probe.state_path());
                return false;
            }
            String::from_utf8_lossy(&output.stderr).contains("non-existent remote object")
        });
        assert!(gone, "group {} still exists after destroy", id);
    }
}

impl Default for AcceptanceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AcceptanceContext {
    /// Best-effort cleanup of a group a failed test left behind
    fn drop(&mut self) {
        if self.managed_id().is_some() {
            let _ = self.command(&["delete", "--yes"]).output();
        }
    }
}

/// Run `check` until it returns true, at most `attempts` times
pub fn retry<F: FnMut() -> bool>(attempts: u32, delay: Duration, mut check: F) -> bool {
    for attempt in 1..=attempts {
        if check() {
            return true;
        }
        if attempt < attempts {
            thread::sleep(delay);
        }
    }
    false
}

/// Unique group name, e.g. `sdsgroup-acctest-1706123456789`
pub fn test_resource_name() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{}-{}", TEST_RESOURCE_PREFIX, ts)
}

#[test]
fn retry_stops_at_first_success() {
    let mut calls = 0;
    assert!(retry(5, Duration::ZERO, || {
        calls += 1;
        calls == 3
    }));
    assert_eq!(calls, 3);
}

#[test]
fn retry_gives_up_after_attempts() {
    let mut calls = 0;
    assert!(!retry(4, Duration::ZERO, || {
        calls += 1;
        false
    }));
    assert_eq!(calls, 4);
}
