//! Command lines for talking to a Gerrit server.
//!
//! The argument vectors built here are a contract with `ssh`, `git` and
//! Gerrit itself: the `ls-projects` admin command, the
//! `ssh://user@host:port/path` URL form, the `gerrit` remote name and the
//! `master` branch. Nothing in this module runs a process.

use std::path::Path;

use crate::config::Remote;
use crate::defaults::{BRANCH, REMOTE_NAME};
use crate::process::CommandSpec;

/// `user@server`, as understood by both `ssh` and git's SSH transport.
pub fn destination(remote: &Remote) -> String {
    format!("{}@{}", remote.user, remote.server)
}

/// SSH clone URL for a repository on the server.
pub fn clone_url(remote: &Remote, name: &str) -> String {
    format!("ssh://{}:{}/{}", destination(remote), remote.port, name)
}

/// The directory part of a repository name, if it has one.
///
/// `"foo/bar"` gives `Some("foo")`, `"bar"` gives `None`.
pub fn parent_dir(name: &str) -> Option<&Path> {
    Path::new(name)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// `ssh -p <port> <user>@<server> gerrit ls-projects`
pub fn ls_projects_command(remote: &Remote) -> CommandSpec {
    CommandSpec::new("ssh")
        .arg("-p")
        .arg(remote.port.as_str())
        .arg(destination(remote))
        .args(["gerrit", "ls-projects"])
}

/// `git clone [--quiet|--progress] --origin gerrit --branch master <url> [<name>]`
///
/// Git names the clone after the last path component of the URL, so the
/// local path is only spelled out when `name` has a directory part.
pub fn clone_command(remote: &Remote, name: &str, quiet: bool, base_dir: &Path) -> CommandSpec {
    let spec = CommandSpec::new("git")
        .arg("clone")
        .arg(if quiet { "--quiet" } else { "--progress" })
        .args(["--origin", REMOTE_NAME, "--branch", BRANCH])
        .arg(clone_url(remote, name))
        .current_dir(base_dir);

    match parent_dir(name) {
        Some(_) => spec.arg(name),
        None => spec,
    }
}

/// `git review --setup`, run inside the fresh clone.
pub fn review_setup_command(clone_dir: &Path) -> CommandSpec {
    CommandSpec::new("git")
        .args(["review", "--setup"])
        .current_dir(clone_dir)
}
