//! Requirements command implementation.
//!
//! The `netsec-pkg requirements` command prints the install requirements,
//! one per line, in manifest order.

use std::path::{Path, PathBuf};

use crate::cli::args::RequirementsArgs;
use crate::error::{PackagingError, Result};
use crate::metadata::{load_metadata, validate};
use crate::package::ResolveOptions;
use crate::requirements::RequirementsLoader;
use crate::ui::UserInterface;

use super::dispatcher::{report_metadata_error, Command, CommandResult};

/// The requirements command implementation.
pub struct RequirementsCommand {
    project_root: PathBuf,
    options: ResolveOptions,
    args: RequirementsArgs,
}

impl RequirementsCommand {
    /// Create a new requirements command.
    pub fn new(project_root: &Path, options: ResolveOptions, args: RequirementsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }

    fn manifest_path(&self) -> Result<PathBuf> {
        if let Some(path) = self.options.requirements_path(&self.project_root) {
            return Ok(path);
        }
        let config = self.options.config_path(&self.project_root);
        let meta = load_metadata(&self.project_root, config.as_deref())?;
        validate(&meta)?;
        Ok(self.options.manifest_path(&self.project_root, &meta))
    }
}

impl Command for RequirementsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = match self.manifest_path() {
            Ok(path) => path,
            Err(e) => return report_metadata_error(e, ui),
        };

        let report = RequirementsLoader::new(&manifest).load()?;
        if !report.found {
            ui.warning(&format!(
                "File containing requirements not found: {}",
                manifest.display()
            ));
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&report.requirements)
                .map_err(|e| PackagingError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_detail() {
            ui.show_header(&format!(
                "{} requirement(s) from {}",
                report.requirements.len(),
                manifest.display()
            ));
        }
        for requirement in &report.requirements {
            ui.message(requirement.as_str());
        }

        Ok(CommandResult::success())
    }
}
