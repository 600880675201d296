//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// netsec-pkg - Packaging metadata for the NetworkSecurity project.
#[derive(Debug, Parser)]
#[command(name = "netsec-pkg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Metadata file, relative to the project root (overrides package.yml layering)
    #[arg(short, long, global = true, env = "NETSEC_PKG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "NETSEC_PKG_PROJECT")]
    pub project: Option<PathBuf>,

    /// Requirement manifest, relative to the project root (overrides requirements_file)
    #[arg(short, long, global = true, env = "NETSEC_PKG_REQUIREMENTS")]
    pub requirements: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List install requirements from the manifest
    Requirements(RequirementsArgs),

    /// Show the resolved package (default if no command specified)
    Show(ShowArgs),

    /// Render core metadata (PKG-INFO)
    PkgInfo(PkgInfoArgs),

    /// Validate package metadata and the requirement manifest
    Check(CheckArgs),

    /// Print the JSON Schema for package.yml
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `requirements` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RequirementsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pkg-info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PkgInfoArgs {
    /// Write to this file, relative to the project root, instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
