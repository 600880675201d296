//! Requirement manifest loader.
//!
//! Reads the manifest line by line, trims each line, and drops blank lines
//! and the editable self-install sentinel. A missing manifest is recovered
//! here: an empty list is returned so packaging can proceed without
//! declared dependencies. [`load_requirements`] logs the diagnostic itself;
//! [`RequirementsLoader::load`] leaves it to the caller through
//! [`LoadReport::found`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::specifier::{Requirement, RequirementList};

/// Conventional manifest file name, relative to the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Marker for "install this project in editable mode".
///
/// Only meaningful to a local development install; never part of the
/// published dependency list.
pub const EDITABLE_SELF_SENTINEL: &str = "-e .";

/// Outcome of loading a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Requirements in manifest order.
    pub requirements: RequirementList,
    /// The manifest path that was read (or looked for).
    pub manifest: PathBuf,
    /// Whether the manifest existed.
    pub found: bool,
}

/// Loads a requirement manifest from a fixed path.
#[derive(Debug, Clone)]
pub struct RequirementsLoader {
    path: PathBuf,
}

impl RequirementsLoader {
    /// Create a loader for the given manifest path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a loader for `requirements.txt` in the project root.
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(REQUIREMENTS_FILE))
    }

    /// The manifest path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the manifest.
    ///
    /// # Errors
    ///
    /// A missing file is not an error; it is reported as `found: false`.
    /// Any other read failure (permissions, invalid UTF-8) is returned as
    /// `PackagingError::Io`.
    pub fn load(&self) -> Result<LoadReport> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No requirement manifest");
                return Ok(LoadReport {
                    requirements: RequirementList::new(),
                    manifest: self.path.clone(),
                    found: false,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let requirements = parse_requirements(&content);
        tracing::debug!(
            path = %self.path.display(),
            count = requirements.len(),
            "Loaded requirements"
        );

        Ok(LoadReport {
            requirements,
            manifest: self.path.clone(),
            found: true,
        })
    }
}

/// Load the requirement list from a manifest path.
///
/// Returns an empty list, and logs a warning, when the file does not exist.
pub fn load_requirements(path: &Path) -> Result<RequirementList> {
    let report = RequirementsLoader::new(path).load()?;
    if !report.found {
        tracing::warn!(
            path = %report.manifest.display(),
            "File containing requirements not found"
        );
    }
    Ok(report.requirements)
}

/// Parse manifest text into a requirement list.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_requirements(content: &str) -> RequirementList {
    content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != EDITABLE_SELF_SENTINEL)
        .map(Requirement::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REQUIREMENTS_FILE);
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn drops_blank_lines_and_sentinel() {
        let (_temp, path) = write_manifest("pandas==1.5.0\n\n-e .\nnumpy>=1.21\n");
        let reqs = load_requirements(&path).unwrap();
        assert_eq!(reqs.to_strings(), vec!["pandas==1.5.0", "numpy>=1.21"]);
    }

    #[test]
    fn empty_manifest_yields_empty_list() {
        let (_temp, path) = write_manifest("");
        let reqs = load_requirements(&path).unwrap();
        assert!(reqs.is_empty());
    }

    #[test]
    fn missing_manifest_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REQUIREMENTS_FILE);
        let reqs = load_requirements(&path).unwrap();
        assert!(reqs.is_empty());
    }

    #[test]
    fn missing_manifest_reports_not_found() {
        let temp = TempDir::new().unwrap();
        let report = RequirementsLoader::for_project(temp.path()).load().unwrap();
        assert!(!report.found);
        assert_eq!(report.manifest, temp.path().join(REQUIREMENTS_FILE));
        assert!(report.requirements.is_empty());
    }

    #[test]
    fn present_manifest_reports_found() {
        let (temp, _path) = write_manifest("scipy\n");
        let report = RequirementsLoader::for_project(temp.path()).load().unwrap();
        assert!(report.found);
        assert_eq!(report.requirements.to_strings(), vec!["scipy"]);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let (_temp, path) = write_manifest("pandas\nnumpy\n-e .\n");
        let first = load_requirements(&path).unwrap();
        let second = load_requirements(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let list = parse_requirements("   \n\t\npandas\n  \t  \n");
        assert_eq!(list.to_strings(), vec!["pandas"]);
    }

    #[test]
    fn padded_sentinel_is_still_excluded() {
        let list = parse_requirements("  -e .  \nnumpy\n");
        assert_eq!(list.to_strings(), vec!["numpy"]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let list = parse_requirements("  pandas==1.5.0\t\n");
        assert_eq!(list.to_strings(), vec!["pandas==1.5.0"]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let list = parse_requirements("pandas\r\n-e .\r\nnumpy\r\n");
        assert_eq!(list.to_strings(), vec!["pandas", "numpy"]);
    }

    #[test]
    fn lone_cr_line_endings_are_split() {
        let list = parse_requirements("pandas\r-e .\rnumpy\r");
        assert_eq!(list.to_strings(), vec!["pandas", "numpy"]);
    }

    #[test]
    fn other_editable_lines_are_kept() {
        let list = parse_requirements("-e ./vendored\n-e .\n");
        assert_eq!(list.to_strings(), vec!["-e ./vendored"]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let list = parse_requirements("numpy\npandas\nnumpy\n");
        assert_eq!(list.to_strings(), vec!["numpy", "pandas", "numpy"]);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let list = parse_requirements("pandas\nnumpy");
        assert_eq!(list.to_strings(), vec!["pandas", "numpy"]);
    }

    #[test]
    fn invalid_utf8_propagates_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REQUIREMENTS_FILE);
        fs::write(&path, [0xff, 0xfe, 0x00, b'\n']).unwrap();
        let err = load_requirements(&path).unwrap_err();
        assert!(matches!(err, crate::error::PackagingError::Io(_)));
    }

    #[test]
    fn directory_path_propagates_error() {
        let temp = TempDir::new().unwrap();
        let result = load_requirements(temp.path());
        assert!(result.is_err());
    }
}
