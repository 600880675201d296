//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::error::{PackagingError, Result};
use crate::package::ResolveOptions;
use crate::ui::UserInterface;

/// Exit code for unusable package metadata.
pub const EXIT_METADATA: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Report metadata problems to the user as exit code 2.
///
/// Other errors are returned unchanged.
pub fn report_metadata_error(
    err: PackagingError,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match err {
        PackagingError::MetadataNotFound { .. }
        | PackagingError::MetadataParseError { .. }
        | PackagingError::MetadataValidationError { .. }
        | PackagingError::DescriptionNotFound { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(EXIT_METADATA))
        }
        other => Err(other),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    options: ResolveOptions,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            options: ResolveOptions::default(),
        }
    }

    /// Set the metadata and manifest overrides.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        let options = self.options.clone();

        match &cli.command {
            Some(Commands::Requirements(args)) => {
                super::requirements::RequirementsCommand::new(root, options, args.clone())
                    .execute(ui)
            }
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(root, options, args.clone()).execute(ui)
            }
            Some(Commands::PkgInfo(args)) => {
                super::pkg_info::PkgInfoCommand::new(root, options, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(root, options, args.clone()).execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::show::ShowCommand::new(root, options, ShowArgs::default()).execute(ui),
        }
    }
}
