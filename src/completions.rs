//! # Shell Completions
//!
//! Generates completion scripts with `clap_complete` for `--completions`.
//!
//! ```bash
//! gerrit-clone --completions bash > ~/.local/share/bash-completion/completions/gerrit-clone
//! gerrit-clone --completions zsh > ~/.zfunc/_gerrit-clone
//! ```

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Shell types for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Fish Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish Shell
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Write the completion script for `shell` to stdout.
pub fn print(shell: CompletionShell) {
    let mut cmd = Cli::command();
    generate(Shell::from(shell), &mut cmd, "gerrit-clone", &mut io::stdout());
}
