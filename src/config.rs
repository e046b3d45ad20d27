//! # Invocation Settings
//!
//! This module turns what the user typed, plus a snapshot of the process
//! environment, into the read-only [`Settings`] used for the rest of a run.
//!
//! ## Defaults
//!
//! - **user**: `--user`, else the platform user-name variable (`USER`, or
//!   `USERNAME` on Windows). If neither is set the run stops with
//!   [`Error::MissingUser`] before any process is started.
//! - **server**: `--server`, else the base name of the current working
//!   directory, so a checkout tree can live in a directory named after the
//!   host (`~/src/review.example.com/`).
//! - **exclusions**: none, unless `--exclude` is given. A bare `--exclude`
//!   adds the four pseudo-projects from [`DEFAULT_EXCLUDES`]; `--exclude NAME`
//!   adds `NAME`.
//!
//! Repository names and exclusions are kept in ordered sets, so duplicates
//! collapse and iteration order is stable.

use std::collections::BTreeSet;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::defaults::{DEFAULT_EXCLUDES, DEFAULT_PORT, USER_ENV_VAR};
use crate::error::{Error, Result};
use crate::output::{Reporter, Verbosity};

/// Where to connect and as whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub user: String,
    pub server: String,
    pub port: String,
}

/// One occurrence of `--exclude` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Bare `--exclude`: the built-in pseudo-projects.
    Defaults,
    /// `--exclude NAME`
    Name(String),
}

/// Options as parsed, before defaults are filled in.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub user: Option<String>,
    pub server: Option<String>,
    pub port: Option<String>,
    pub list: bool,
    pub verbosity: Verbosity,
    pub exclude: Vec<Exclusion>,
    pub repositories: Vec<String>,
}

/// The parts of the process environment the resolver looks at.
#[derive(Debug, Clone)]
pub struct Environment {
    pub user: Option<String>,
    pub cwd: PathBuf,
}

impl Environment {
    /// Snapshot the real environment.
    pub fn capture() -> io::Result<Self> {
        Ok(Self {
            user: env::var(USER_ENV_VAR).ok().filter(|user| !user.is_empty()),
            cwd: env::current_dir()?,
        })
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub remote: Remote,
    pub list: bool,
    pub verbosity: Verbosity,
    pub exclude: BTreeSet<String>,
    pub repositories: BTreeSet<String>,
}

impl Settings {
    /// Fill in defaults from `env` and report what was derived.
    pub fn resolve<W: Write>(
        options: Options,
        env: &Environment,
        reporter: &mut Reporter<W>,
    ) -> Result<Self> {
        let user = match options.user {
            Some(user) => user,
            None => {
                let user = env.user.clone().ok_or(Error::MissingUser)?;
                reporter.verbose(
                    1,
                    format_args!("No user given, using '{}' from environment.", user),
                );
                user
            }
        };

        let server = match options.server {
            Some(server) => server,
            None => {
                reporter.verbose(2, format_args!("CWD: {}", env.cwd.display()));
                let server = server_from_dir(env)?;
                reporter.verbose(
                    1,
                    format_args!("No server given, using '{}' from containing path.", server),
                );
                server
            }
        };

        let exclude = exclusion_set(&options.exclude);
        reporter.verbose(2, format_args!("Excluded repositories: {:?}", exclude));

        Ok(Self {
            remote: Remote {
                user,
                server,
                port: options.port.unwrap_or_else(|| DEFAULT_PORT.to_string()),
            },
            list: options.list,
            verbosity: options.verbosity,
            exclude,
            repositories: options.repositories.into_iter().collect(),
        })
    }

    /// Requested repositories that are not excluded.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.repositories
            .difference(&self.exclude)
            .map(String::as_str)
    }
}

fn server_from_dir(env: &Environment) -> Result<String> {
    env.cwd
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::MissingServer {
            cwd: env.cwd.clone(),
        })
}

/// Flatten every `--exclude` occurrence into one set of names.
pub fn exclusion_set(items: &[Exclusion]) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    for item in items {
        match item {
            Exclusion::Defaults => set.extend(DEFAULT_EXCLUDES.iter().map(|s| s.to_string())),
            Exclusion::Name(name) => {
                set.insert(name.clone());
            }
        }
    }
    set
}
