//! # gerrit-clone CLI
//!
//! Binary entry point. Parses the command line with `clap`, runs the
//! requested mode and turns the outcome into a process exit code. The work
//! itself lives in the `gerrit_clone` library crate.

mod cli;
mod completions;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
