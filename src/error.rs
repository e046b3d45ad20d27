//! # Error Handling
//!
//! This module defines the error type shared by the `gerrit-clone` library.
//! It uses `thiserror` to describe every way a run can stop early:
//!
//! - The user name could not be resolved from the flags or the environment.
//! - The server name could not be derived from the working directory.
//! - A directory for a nested repository could not be created.
//! - An external command (`ssh`, `git`) could not be started.
//! - An external command exited with a non-zero status.
//!
//! None of these are retried. The binary maps each of them to exit status 1
//! and prints whatever the failing command wrote to its standard error.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gerrit-clone operations
#[derive(Error, Debug)]
pub enum Error {
    /// Neither `--user` nor the user-name environment variable was set.
    #[error("Couldn't get user name, please provide one.")]
    MissingUser,

    /// `--server` was not given and the working directory has no base name.
    #[error("Couldn't derive a server name from {}, please provide one.", cwd.display())]
    MissingServer { cwd: PathBuf },

    /// A parent directory for a nested repository could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operating system could not start the command at all.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully.
    ///
    /// `stderr` holds the captured error output, or is empty when the
    /// command streamed straight to the terminal.
    #[error("`{command}` failed ({})", describe_code(*code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
