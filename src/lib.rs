//! netsec-pkg - Packaging metadata for the NetworkSecurity project.
//!
//! NetworkSecurity is a network intrusion detection system built with
//! machine learning on the UNSW-NB15 dataset. This crate describes how it is
//! packaged: the install requirements read from `requirements.txt`, the
//! static package metadata, and the core metadata handed to the installer.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`metadata`] - Package metadata loading, layering, and validation
//! - [`package`] - Package discovery, resolution, and PKG-INFO rendering
//! - [`requirements`] - Requirement manifest loading
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use netsec_pkg::requirements::parse_requirements;
//!
//! let list = parse_requirements("  -e .  \nscikit-learn\n\n");
//! assert_eq!(list.to_strings(), vec!["scikit-learn"]);
//! ```

pub mod cli;
pub mod error;
pub mod metadata;
pub mod package;
pub mod requirements;
pub mod ui;

pub use error::{PackagingError, Result};
