//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`], which also carries the global path overrides.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod pkg_info;
pub mod requirements;
pub mod schema;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
