//! Package metadata: loading, layering, validation, and the long description.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//! - README handling in [`description`]
//! - JSON Schema output in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use netsec_pkg::metadata::{load_merged_metadata, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("package.yml"), "version: 1.1.0").unwrap();
//!
//! let meta = load_merged_metadata(temp.path()).unwrap();
//! validate(&meta).unwrap();
//! assert_eq!(meta.version, "1.1.0");
//! assert_eq!(meta.name, "NetworkSecurity");
//! ```
//!
//! # Metadata File Locations
//!
//! Both files live in the project root and are optional:
//! 1. `package.yml`
//! 2. `package.local.yml` (overrides)

pub mod description;
pub mod json_schema;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use description::{infer_content_type, LongDescription};
pub use json_schema::SchemaGenerator;
pub use loader::{
    load_merged_metadata, load_metadata, load_metadata_file, parse_metadata, MetadataPaths,
    LOCAL_METADATA_FILE, METADATA_FILE,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::PackageMetadata;
pub use validator::{validate, validate_metadata, ValidationError};
