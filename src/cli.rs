//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};

use gerrit_clone::config::{Environment, Exclusion, Options, Settings};
use gerrit_clone::defaults::{DEFAULT_PORT, LOG_ENV_VAR};
use gerrit_clone::dispatch::Dispatcher;
use gerrit_clone::error::Error;
use gerrit_clone::output::{Reporter, Verbosity};
use gerrit_clone::process::SystemRunner;

use crate::completions::{self, CompletionShell};

/// List and check out Gerrit repositories.
///
/// Each repository is cloned over SSH with the remote named `gerrit`, then
/// `git review --setup` installs the review hooks. Nested names such as
/// `tools/ci` are cloned into matching directories.
///
/// When --server is not given, the name of the current directory is used as
/// the server, so a tree like `~/src/review.example.com/` needs no flags.
#[derive(Parser, Debug)]
#[command(name = "gerrit-clone")]
#[command(version)]
pub struct Cli {
    /// Repositories to clone
    #[arg(value_name = "REPOSITORY")]
    repository: Vec<String>,

    /// The username to use [default: $USER]
    #[arg(short, long)]
    user: Option<String>,

    /// The server to connect to [default: name of the current directory]
    #[arg(short, long, env = "GERRIT_SERVER")]
    server: Option<String>,

    /// List available repositories
    #[arg(short, long)]
    list: bool,

    /// Server port to use
    #[arg(short, long, env = "GERRIT_PORT", default_value = DEFAULT_PORT)]
    port: String,

    /// Exclude (pseudo) projects; without NAME, excludes All-Projects,
    /// All-Users, AllowSelfApproval-Project and NoReviews-Project
    #[arg(
        short,
        long,
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = "",
        action = ArgAction::Append
    )]
    exclude: Vec<String>,

    /// Be more verbose (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Silent operation
    #[arg(short, long)]
    quiet: bool,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    completions: Option<CompletionShell>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        if let Some(shell) = self.completions {
            completions::print(shell);
            return Ok(ExitCode::SUCCESS);
        }

        let options = self.into_options();
        init_logging(options.verbosity);

        let mut reporter = Reporter::stdout(options.verbosity);
        let env = Environment::capture().context("Failed to read the current directory")?;

        let settings = match Settings::resolve(options, &env, &mut reporter) {
            Ok(settings) => settings,
            Err(error) => return Ok(report(&error)),
        };

        let usage = Cli::command().render_usage().to_string();
        let mut dispatcher = Dispatcher::new(&settings, SystemRunner, reporter, &env.cwd);
        match dispatcher.run(&usage) {
            Ok(code) => Ok(exit_code(code)),
            Err(error) => Ok(report(&error)),
        }
    }

    fn into_options(self) -> Options {
        Options {
            user: self.user,
            server: self.server,
            port: Some(self.port),
            list: self.list,
            verbosity: Verbosity::from_flags(self.quiet, self.verbose),
            exclude: self
                .exclude
                .into_iter()
                .map(|name| {
                    if name.is_empty() {
                        Exclusion::Defaults
                    } else {
                        Exclusion::Name(name)
                    }
                })
                .collect(),
            repositories: self.repository,
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.log_filter())
        .parse_env(LOG_ENV_VAR)
        .format_timestamp(None)
        .try_init();
}

/// Print an error on stderr and return the exit code for it.
///
/// A failed command's captured stderr is printed verbatim before the
/// summary line.
fn report(error: &Error) -> ExitCode {
    match error {
        Error::MissingUser => {
            eprintln!("{}", error);
            eprintln!("hint: Use -u/--user or set the user name environment variable");
        }
        Error::CommandFailed { stderr, .. } => {
            if !stderr.is_empty() {
                eprintln!("{}", stderr.trim_end());
            }
            eprintln!("error: {}", error);
        }
        _ => eprintln!("error: {}", error),
    }
    ExitCode::FAILURE
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status(code))
}

/// Exit codes outside 0..=255 cannot be passed on and become 1.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
