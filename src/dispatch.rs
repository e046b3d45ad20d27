//! # Command Dispatch
//!
//! This module decides what a run does with its [`Settings`] and drives the
//! external commands for it. There are three modes:
//!
//! 1. **List**: stream `gerrit ls-projects` over SSH and hand back its exit
//!    code.
//! 2. **Usage**: nothing to list and nothing to clone, so print the usage
//!    line and exit 1.
//! 3. **Clone**: for every requested repository that is not excluded, make
//!    its parent directory, `git clone` it and run `git review --setup`
//!    inside the clone.
//!
//! Repositories are processed one after another. The first failure stops
//! the whole batch; nothing is retried.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::gerrit;
use crate::output::Reporter;
use crate::process::{Captured, CommandRunner};

/// What a run is going to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    List,
    Usage,
    /// Repositories left after exclusions, possibly none.
    Clone(Vec<&'a str>),
}

impl<'a> Mode<'a> {
    pub fn of(settings: &'a Settings) -> Self {
        if settings.list {
            Mode::List
        } else if settings.repositories.is_empty() {
            Mode::Usage
        } else {
            Mode::Clone(settings.selected().collect())
        }
    }
}

/// Runs a resolved invocation against a [`CommandRunner`].
pub struct Dispatcher<'a, R: CommandRunner, W: Write> {
    settings: &'a Settings,
    runner: R,
    reporter: Reporter<W>,
    base_dir: PathBuf,
}

impl<'a, R: CommandRunner, W: Write> Dispatcher<'a, R, W> {
    /// `base_dir` is where clones and their parent directories are created.
    pub fn new(
        settings: &'a Settings,
        runner: R,
        reporter: Reporter<W>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            settings,
            runner,
            reporter,
            base_dir: base_dir.into(),
        }
    }

    /// Run the mode selected by the settings and return the exit code.
    ///
    /// `usage` is printed in [`Mode::Usage`].
    pub fn run(&mut self, usage: &str) -> Result<i32> {
        match Mode::of(self.settings) {
            Mode::List => self.list_projects(),
            Mode::Usage => {
                self.reporter.say(format_args!("{}", usage.trim_end()));
                Ok(1)
            }
            Mode::Clone(names) => {
                for name in names {
                    self.clone_one(name)?;
                }
                Ok(0)
            }
        }
    }

    /// Stream the server's project list to the terminal.
    ///
    /// Returns `ssh`'s exit code, or 1 if it was killed by a signal.
    pub fn list_projects(&mut self) -> Result<i32> {
        let spec = gerrit::ls_projects_command(&self.settings.remote);
        self.reporter.flush();
        Ok(self.runner.stream(&spec)?.unwrap_or(1))
    }

    /// Clone one repository and set up review hooks in it.
    pub fn clone_one(&mut self, name: &str) -> Result<()> {
        let settings = self.settings;
        let remote = &settings.remote;
        let quiet = settings.verbosity.is_quiet();

        self.reporter.blank(1);

        if let Some(parent) = gerrit::parent_dir(name) {
            let target = self.base_dir.join(parent);
            if !target.exists() {
                self.reporter.verbose(
                    1,
                    format_args!(
                        "Making directory {} for repository {}",
                        parent.display(),
                        name
                    ),
                );
                fs::create_dir_all(&target).map_err(|source| Error::CreateDir {
                    path: target.clone(),
                    source,
                })?;
            }
        }

        // git only draws progress when its stderr is a terminal, so a
        // visible clone has to stream rather than be captured.
        let clone = gerrit::clone_command(remote, name, quiet, &self.base_dir);
        let cloned = if quiet {
            self.runner.capture(&clone)?
        } else {
            self.reporter.flush();
            Captured {
                code: self.runner.stream(&clone)?,
                stderr: String::new(),
            }
        };
        cloned.into_result(&clone)?;
        info!("cloned {} from {}", name, remote.server);

        self.reporter
            .verbose(1, format_args!("Installing Gerrit hooks..."));
        let setup = gerrit::review_setup_command(&self.base_dir.join(name));
        self.runner.capture(&setup)?.into_result(&setup)?;
        info!("installed review hooks in {}", name);

        Ok(())
    }

    /// Consume the dispatcher and return its reporter.
    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }
}
