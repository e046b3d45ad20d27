//! Shared test utilities for E2E tests.
//!
//! The binary only ever talks to the outside world through `ssh` and `git`,
//! so the fixture puts fake versions of both first on `PATH`. Each fake
//! appends its command line and working directory to a log file, which the
//! tests read back to see what would have been run.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new();
//! fixture.command().args(["-u", "alice", "-s", "host", "repo"]).assert().success();
//! assert!(fixture.log().contains("git clone"));
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Fake `git`: logs its arguments, creates the clone directory, and fails
/// on request through `FAKE_CLONE_FAIL` / `FAKE_REVIEW_FAIL`.
const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $* | $(pwd)" >> "$FAKE_LOG"
case "$1" in
  clone)
    if [ -n "$FAKE_CLONE_FAIL" ]; then
      echo "fatal: could not read from remote repository" >&2
      exit 128
    fi
    for last in "$@"; do :; done
    case "$last" in
      ssh://*) target=$(basename "$last") ;;
      *) target="$last" ;;
    esac
    mkdir -p "$target"
    ;;
  review)
    if [ -n "$FAKE_REVIEW_FAIL" ]; then
      echo "Problems encountered installing commit-msg hook" >&2
      exit 1
    fi
    echo "hook installed"
    ;;
esac
exit 0
"#;

/// Fake `ssh`: logs its arguments, prints one project, exits with
/// `FAKE_SSH_EXIT` (default 0).
const FAKE_SSH: &str = r#"#!/bin/sh
echo "ssh $* | $(pwd)" >> "$FAKE_LOG"
echo "project-a"
exit "${FAKE_SSH_EXIT:-0}"
"#;

/// A temporary working directory plus a directory of fake tools.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture with fake `git` and `ssh` installed.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let fixture = Self { temp_dir };
        fixture.install_tool("git", FAKE_GIT);
        fixture.install_tool("ssh", FAKE_SSH);
        fixture.work_dir().create_dir_all().expect("Failed to create work dir");
        fixture
    }

    fn install_tool(&self, name: &str, script: &str) {
        let tool = self.temp_dir.child("bin").child(name);
        tool.write_str(script).expect("Failed to write fake tool");
        make_executable(tool.path());
    }

    /// The directory the binary runs in, named like a Gerrit host.
    pub fn work_dir(&self) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("review.example.com")
    }

    pub fn path(&self) -> PathBuf {
        self.work_dir().path().to_path_buf()
    }

    fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("calls.log")
    }

    /// Everything the fake tools logged, empty if none ran.
    pub fn log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Logged calls, one per line.
    pub fn calls(&self) -> Vec<String> {
        self.log().lines().map(str::to_string).collect()
    }

    /// A command for the binary with the fakes first on `PATH` and the
    /// environment cleared of variables that would change defaults.
    pub fn command(&self) -> assert_cmd::Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.temp_dir.path().join("bin")];
        paths.extend(std::env::split_paths(&path));

        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gerrit-clone");
        cmd.current_dir(self.path())
            .env("PATH", std::env::join_paths(paths).expect("Invalid PATH"))
            .env("FAKE_LOG", self.log_path())
            .env("USER", "alice")
            .env_remove("GERRIT_SERVER")
            .env_remove("GERRIT_PORT")
            .env_remove("GERRIT_CLONE_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
