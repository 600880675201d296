//! Check command implementation.
//!
//! The `netsec-pkg check` command validates package metadata and inspects
//! the requirement manifest. Rule violations are errors; a missing
//! manifest, a missing README, and repeated requirements are warnings.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{PackagingError, Result};
use crate::metadata::{load_metadata, validate_metadata, ValidationError};
use crate::package::ResolveOptions;
use crate::requirements::RequirementsLoader;
use crate::ui::UserInterface;

use super::dispatcher::{report_metadata_error, Command, CommandResult};

/// Findings from a check run.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Metadata rule violations.
    pub errors: Vec<ValidationError>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    options: ResolveOptions,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, options: ResolveOptions, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }

    /// Run every check and collect the findings.
    pub fn run_checks(&self) -> Result<CheckReport> {
        let config = self.options.config_path(&self.project_root);
        let meta = load_metadata(&self.project_root, config.as_deref())?;
        let mut report = CheckReport {
            errors: validate_metadata(&meta),
            ..Default::default()
        };

        let readme = self.project_root.join(&meta.long_description_file);
        if !readme.is_file() {
            report.warnings.push(format!(
                "Long description file not found: {}",
                readme.display()
            ));
        }

        let manifest = self.options.manifest_path(&self.project_root, &meta);
        let loaded = RequirementsLoader::new(&manifest).load()?;
        if !loaded.found {
            report.warnings.push(format!(
                "File containing requirements not found: {}",
                manifest.display()
            ));
        }
        for dup in loaded.requirements.duplicates() {
            report
                .warnings
                .push(format!("Requirement '{}' is listed more than once", dup));
        }

        Ok(report)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = match self.run_checks() {
            Ok(report) => report,
            Err(e) => return report_metadata_error(e, ui),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| PackagingError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for error in &report.errors {
                ui.error(&error.to_string());
            }
            for warning in &report.warnings {
                ui.warning(warning);
            }
            if report.passed() {
                ui.success(&format!(
                    "Package metadata is valid ({} warning(s))",
                    report.warnings.len()
                ));
            }
        }

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
