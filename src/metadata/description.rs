//! Long description loading.
//!
//! The long description is the project README, read verbatim. Unlike the
//! requirement manifest, a missing README is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::{PackagingError, Result};

use super::schema::PackageMetadata;

/// The long description text and its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDescription {
    /// File contents, unmodified.
    pub text: String,
    /// MIME type, e.g. `text/markdown`.
    pub content_type: String,
}

impl LongDescription {
    /// Read the long description named by the metadata.
    ///
    /// The path is resolved against `project_root` unless absolute.
    pub fn load(project_root: &Path, meta: &PackageMetadata) -> Result<Self> {
        let path = project_root.join(&meta.long_description_file);
        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PackagingError::DescriptionNotFound { path: path.clone() }
            } else {
                PackagingError::Io(e)
            }
        })?;

        let content_type = meta
            .long_description_content_type
            .clone()
            .unwrap_or_else(|| infer_content_type(&meta.long_description_file).to_string());

        Ok(Self { text, content_type })
    }
}

/// Infer a long description MIME type from the file extension.
pub fn infer_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("md") | Some("markdown") => "text/markdown",
        Some("rst") => "text/x-rst",
        _ => "text/plain",
    }
}
