//! Resolved package description.
//!
//! Brings together everything the installer is told about the package:
//! metadata, long description, discovered packages, and the requirement list.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::metadata::{load_metadata, validate, LongDescription, PackageMetadata};
use crate::requirements::{LoadReport, RequirementList, RequirementsLoader};

use super::discovery::find_packages;

/// Overrides for where resolution reads its inputs.
///
/// Relative paths are taken from the project root, not the current directory.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Load only this metadata file instead of the project layers.
    pub config: Option<PathBuf>,

    /// Read requirements from this manifest instead of the metadata's
    /// `requirements_file`.
    pub requirements: Option<PathBuf>,
}

impl ResolveOptions {
    /// The explicit metadata file, if any.
    pub fn config_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.config.as_ref().map(|path| project_root.join(path))
    }

    /// The explicit manifest, if any.
    pub fn requirements_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.requirements.as_ref().map(|path| project_root.join(path))
    }

    /// The manifest path to use for a project.
    pub fn manifest_path(&self, project_root: &Path, meta: &PackageMetadata) -> PathBuf {
        self.requirements_path(project_root)
            .unwrap_or_else(|| project_root.join(&meta.requirements_file))
    }
}

/// A fully resolved package.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPackage {
    /// Static metadata after layering.
    pub metadata: PackageMetadata,

    /// README text and content type.
    pub long_description: LongDescription,

    /// Discovered import packages, sorted.
    pub packages: Vec<String>,

    /// Install requirements in manifest order.
    pub install_requires: RequirementList,

    /// Manifest that supplied `install_requires`.
    pub requirements_manifest: PathBuf,

    /// Whether that manifest existed.
    pub requirements_found: bool,
}

impl ResolvedPackage {
    /// Resolve the package for a project root.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or invalid metadata, a missing long description,
    /// or an unreadable manifest. A missing manifest is not an error.
    pub fn resolve(project_root: &Path, options: &ResolveOptions) -> Result<Self> {
        let metadata = load_metadata(project_root, options.config_path(project_root).as_deref())?;
        validate(&metadata)?;

        let long_description = LongDescription::load(project_root, &metadata)?;
        let packages = find_packages(project_root, &metadata.exclude_packages)?;

        let LoadReport {
            requirements,
            manifest,
            found,
        } = RequirementsLoader::new(options.manifest_path(project_root, &metadata)).load()?;

        tracing::debug!(
            name = %metadata.name,
            version = %metadata.version,
            requirements = requirements.len(),
            packages = packages.len(),
            "Resolved package"
        );

        Ok(Self {
            metadata,
            long_description,
            packages,
            install_requires: requirements,
            requirements_manifest: manifest,
            requirements_found: found,
        })
    }
}
