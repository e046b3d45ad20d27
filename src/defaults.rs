//! Default values for gerrit-clone.
//!
//! This module collects the fixed names the tool passes to `ssh` and `git`
//! so that the command builders and the CLI agree on them.

/// Gerrit's default SSH port.
pub const DEFAULT_PORT: &str = "29418";

/// Name given to the remote in every fresh clone.
pub const REMOTE_NAME: &str = "gerrit";

/// Branch checked out by every fresh clone.
pub const BRANCH: &str = "master";

/// Pseudo-projects every Gerrit server carries. A bare `--exclude` skips these.
pub const DEFAULT_EXCLUDES: [&str; 4] = [
    "All-Projects",
    "All-Users",
    "AllowSelfApproval-Project",
    "NoReviews-Project",
];

/// Environment variable holding the login name of the current user.
#[cfg(windows)]
pub const USER_ENV_VAR: &str = "USERNAME";

/// Environment variable holding the login name of the current user.
#[cfg(not(windows))]
pub const USER_ENV_VAR: &str = "USER";

/// Environment variable read by `env_logger` for the log filter.
pub const LOG_ENV_VAR: &str = "GERRIT_CLONE_LOG";
