//! Command-line interface for netsec-pkg.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, PkgInfoArgs, RequirementsArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
