//! roster-cli library
//!
//! Argument parsing, logging setup, rendering and command dispatch for the
//! `roster` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod stderr_notifier;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, execute};
pub use error::{CliError, Result as CliResult};
pub use stderr_notifier::StderrNotifier;

/// Header printed above the list in text mode.
pub const LIST_HEADER: &str = "Welcome to the User List";
