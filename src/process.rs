//! # External Commands
//!
//! Everything `gerrit-clone` does on the server side happens in child
//! processes: `ssh` for the project listing and `git` for cloning and hook
//! setup. This module describes such a command as plain data
//! ([`CommandSpec`]) and runs it through the [`CommandRunner`] trait.
//!
//! A command runs in one of two ways:
//!
//! - **streamed**: stdin, stdout and stderr are inherited, so progress bars
//!   and password prompts reach the terminal. Only the exit code comes back.
//! - **captured**: stdout and stderr are piped and discarded or kept, so the
//!   caller can print stderr if the command fails.
//!
//! [`SystemRunner`] uses `std::process::Command`. Tests swap in a recording
//! runner so that no real process is ever started.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, trace};

use crate::error::{Error, Result};

/// A program with its arguments and an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit code and error output of a captured command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a failed run into [`Error::CommandFailed`].
    pub fn into_result(self, spec: &CommandSpec) -> Result<()> {
        if self.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: spec.to_string(),
                code: self.code,
                stderr: self.stderr,
            })
        }
    }
}

/// Trait for running external commands - allows mocking in tests
pub trait CommandRunner: Send + Sync {
    /// Run with inherited stdio and return the exit code.
    fn stream(&self, spec: &CommandSpec) -> Result<Option<i32>>;

    /// Run with stdout and stderr piped and return the exit code and stderr.
    fn capture(&self, spec: &CommandSpec) -> Result<Captured>;
}

/// The default implementation of `CommandRunner`, which starts real processes.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn stream(&self, spec: &CommandSpec) -> Result<Option<i32>> {
        debug!("running {}", spec);
        let status = spec.to_command().status().map_err(|source| Error::Spawn {
            command: spec.to_string(),
            source,
        })?;
        trace!("{} exited with {}", spec.program, status);
        Ok(status.code())
    }

    fn capture(&self, spec: &CommandSpec) -> Result<Captured> {
        debug!("running {} (captured)", spec);
        let output = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                command: spec.to_string(),
                source,
            })?;
        trace!("{} exited with {}", spec.program, output.status);
        Ok(Captured {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
