//! # gerrit-clone
//!
//! List the repositories on a Gerrit server and clone them with review
//! hooks installed. The heavy lifting is done by `ssh` and `git`; this crate
//! works out what to run and in which order.
//!
//! ## Quick Example
//!
//! ```
//! use gerrit_clone::config::Remote;
//! use gerrit_clone::gerrit;
//! use std::path::Path;
//!
//! let remote = Remote {
//!     user: "alice".to_string(),
//!     server: "review.example.com".to_string(),
//!     port: "29418".to_string(),
//! };
//!
//! let clone = gerrit::clone_command(&remote, "tools/ci", false, Path::new("."));
//! assert_eq!(
//!     clone.to_string(),
//!     "git clone --progress --origin gerrit --branch master \
//!      ssh://alice@review.example.com:29418/tools/ci tools/ci"
//! );
//! ```
//!
//! ## Modules
//!
//! - **`config`**: resolves flags and the environment into `Settings`.
//! - **`dispatch`**: picks list, usage or clone mode and drives the commands.
//! - **`gerrit`**: builds the exact `ssh` and `git` command lines.
//! - **`process`**: runs commands, streamed or captured, behind a trait.
//! - **`output`**: verbosity-gated printing in place of a global stdout switch.
//! - **`error`**: the library's error type.

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod gerrit;
pub mod output;
pub mod process;

#[cfg(test)]
mod config_proptest;
