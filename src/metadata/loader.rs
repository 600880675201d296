//! Metadata file discovery and loading.
//!
//! Neither metadata file is required. Without them the built-in defaults
//! describe the package.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{PackagingError, Result};

use super::merger::merge_layers;
use super::schema::PackageMetadata;

/// Project metadata file name.
pub const METADATA_FILE: &str = "package.yml";

/// Local override file name, layered over [`METADATA_FILE`].
pub const LOCAL_METADATA_FILE: &str = "package.local.yml";

/// Metadata files found for a project, in merge order.
#[derive(Debug, Clone, Default)]
pub struct MetadataPaths {
    /// `package.yml`
    pub project: Option<PathBuf>,

    /// `package.local.yml`
    pub project_local: Option<PathBuf>,
}

impl MetadataPaths {
    /// Discover metadata files in the project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(METADATA_FILE)),
            project_local: existing(project_root.join(LOCAL_METADATA_FILE)),
        }
    }

    /// Existing paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML text into metadata. An empty document yields the defaults.
pub fn parse_metadata(content: &str, source_path: &Path) -> Result<PackageMetadata> {
    let value = parse_value(content, source_path)?;
    from_value(value, source_path)
}

/// Load a single metadata file with no layering.
///
/// # Errors
///
/// Returns `MetadataNotFound` if the file doesn't exist and
/// `MetadataParseError` if it isn't valid metadata YAML.
pub fn load_metadata_file(path: &Path) -> Result<PackageMetadata> {
    let content = read(path)?;
    parse_metadata(&content, path)
}

/// Load and merge `package.yml` and `package.local.yml`.
pub fn load_merged_metadata(project_root: &Path) -> Result<PackageMetadata> {
    let paths = MetadataPaths::discover(project_root);

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading metadata layer {}", path.display());
        layers.push(parse_value(&read(path)?, path)?);
    }

    if layers.is_empty() {
        tracing::debug!("No metadata files found, using defaults");
        return Ok(PackageMetadata::default());
    }

    from_value(merge_layers(&layers), &project_root.join(METADATA_FILE))
}

/// Load metadata with an optional explicit file.
///
/// An explicit file is loaded alone. Otherwise the project layers are merged.
pub fn load_metadata(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<PackageMetadata> {
    match config_override {
        Some(path) => load_metadata_file(path),
        None => load_merged_metadata(project_root),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PackagingError::MetadataNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackagingError::Io(e)
        }
    })
}

fn parse_value(content: &str, source_path: &Path) -> Result<Value> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| PackagingError::MetadataParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty document parses as null; treat it as "no overrides".
    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

fn from_value(value: Value, source_path: &Path) -> Result<PackageMetadata> {
    serde_yaml::from_value(value).map_err(|e| PackagingError::MetadataParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
