//! Error types for packaging operations.
//!
//! This module defines [`PackagingError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing requirements manifest is *not* an error; the loader recovers
//!   locally and returns an empty list
//! - Use `PackagingError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PackagingError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for packaging operations.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// An explicitly requested metadata file does not exist.
    #[error("Package metadata not found: {path}")]
    MetadataNotFound { path: PathBuf },

    /// Failed to parse a metadata file.
    #[error("Failed to parse package metadata at {path}: {message}")]
    MetadataParseError { path: PathBuf, message: String },

    /// Metadata parsed but violates one or more validation rules.
    #[error("Invalid package metadata: {message}")]
    MetadataValidationError { message: String },

    /// The long description file could not be found.
    #[error("Long description file not found: {path}")]
    DescriptionNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, PackagingError>;
