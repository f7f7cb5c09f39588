//! VendCheck CLI - command-line front end for the compliance core.

#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
