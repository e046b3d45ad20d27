//! # Output Configuration
//!
//! This module controls what `gerrit-clone` prints on standard output.
//! Informational lines go through a [`Reporter`], which is handed to every
//! call site that wants to print and decides, from a [`Verbosity`], whether a
//! line is shown.
//!
//! ## Levels
//!
//! - `--quiet`: nothing is printed on stdout, not even the usage line
//! - default: only the usage line
//! - `-v`: per-repository progress lines
//! - `-vv`: resolution details such as the working directory and exclusions
//!
//! Errors never go through the reporter; they are written to stderr by the
//! binary so that `--quiet` cannot hide them.
//!
//! ## Usage
//!
//! ```
//! use gerrit_clone::output::{Reporter, Verbosity};
//!
//! let mut reporter = Reporter::new(Verbosity::from_flags(false, 1), Vec::new());
//! reporter.verbose(1, format_args!("Installing Gerrit hooks..."));
//! reporter.verbose(2, format_args!("not shown at -v"));
//! assert_eq!(reporter.into_inner(), b"Installing Gerrit hooks...\n");
//! ```

use std::fmt;
use std::io::{self, Write};

use log::LevelFilter;

/// How much the user asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: no informational output at all.
    Quiet,
    /// Number of `-v` flags given (zero by default).
    Level(u8),
}

impl Verbosity {
    /// Build a verbosity from the parsed `--quiet` and `--verbose` flags.
    ///
    /// The CLI rejects both flags together; if a caller passes both anyway,
    /// quiet wins.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Level(verbose)
        }
    }

    pub fn is_quiet(self) -> bool {
        matches!(self, Verbosity::Quiet)
    }

    /// The `-v` count, zero when quiet.
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Level(level) => level,
        }
    }

    /// Whether a line printed at `level` should be shown.
    pub fn allows(self, level: u8) -> bool {
        !self.is_quiet() && self.level() >= level
    }

    /// Default log filter for this verbosity, before `GERRIT_CLONE_LOG` is applied.
    pub fn log_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Level(0 | 1) => LevelFilter::Warn,
            Verbosity::Level(2) => LevelFilter::Debug,
            Verbosity::Level(_) => LevelFilter::Trace,
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Level(0)
    }
}

/// Verbosity-gated writer for informational output.
pub struct Reporter<W: Write = io::Stdout> {
    verbosity: Verbosity,
    out: W,
}

impl Reporter<io::Stdout> {
    /// A reporter writing to the process's standard output.
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(verbosity, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(verbosity: Verbosity, out: W) -> Self {
        Self { verbosity, out }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Print a line unless `--quiet` was given.
    pub fn say(&mut self, args: fmt::Arguments<'_>) {
        self.verbose(0, args);
    }

    /// Print a line when at least `level` `-v` flags were given.
    pub fn verbose(&mut self, level: u8, args: fmt::Arguments<'_>) {
        if self.verbosity.allows(level) {
            // A closed stdout is not worth aborting a clone over.
            let _ = writeln!(self.out, "{}", args);
        }
    }

    /// Print an empty separator line at `level`.
    pub fn blank(&mut self, level: u8) {
        self.verbose(level, format_args!(""));
    }

    /// Flush pending output so it lands before a child process writes.
    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
