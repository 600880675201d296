//! Show command implementation.
//!
//! The `netsec-pkg show` command prints the resolved package: metadata,
//! discovered packages, and install requirements.

use std::path::{Path, PathBuf};

use crate::cli::args::ShowArgs;
use crate::error::{PackagingError, Result};
use crate::package::{ResolveOptions, ResolvedPackage};
use crate::ui::UserInterface;

use super::dispatcher::{report_metadata_error, Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    options: ResolveOptions,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, options: ResolveOptions, args: ShowArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pkg = match ResolvedPackage::resolve(&self.project_root, &self.options) {
            Ok(pkg) => pkg,
            Err(e) => return report_metadata_error(e, ui),
        };

        if !pkg.requirements_found {
            ui.warning(&format!(
                "File containing requirements not found: {}",
                pkg.requirements_manifest.display()
            ));
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&pkg).map_err(|e| PackagingError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let meta = &pkg.metadata;
        ui.show_header(&format!("{} {}", meta.name, meta.version));
        ui.key_value("Name", &meta.name);
        ui.key_value("Version", &meta.version);
        ui.key_value("Summary", &meta.description);
        ui.key_value("Author", &format!("{} <{}>", meta.author, meta.author_email));
        ui.key_value("Home-page", &meta.url);
        ui.key_value("Requires-Python", &meta.python_requires);
        ui.key_value(
            "Long description",
            &format!(
                "{} ({}, {} bytes)",
                meta.long_description_file.display(),
                pkg.long_description.content_type,
                pkg.long_description.text.len()
            ),
        );

        let detail = ui.output_mode().shows_detail();

        ui.key_value("Classifiers", &meta.classifiers.len().to_string());
        if detail {
            for classifier in &meta.classifiers {
                ui.message(&format!("    {}", classifier));
            }
        }

        ui.key_value("Packages", &pkg.packages.len().to_string());
        if detail {
            for name in &pkg.packages {
                ui.message(&format!("    {}", name));
            }
        }

        ui.key_value("Install requires", &pkg.install_requires.len().to_string());
        for requirement in &pkg.install_requires {
            ui.message(&format!("    {}", requirement));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# NetworkSecurity\n").unwrap();
        fs::write(temp.path().join("requirements.txt"), "pandas\n-e .\nnumpy\n").unwrap();
        fs::create_dir_all(temp.path().join("networksecurity")).unwrap();
        fs::write(temp.path().join("networksecurity/__init__.py"), "").unwrap();
        temp
    }

    fn run(temp: &TempDir, args: ShowArgs, ui: &mut MockUI) -> CommandResult {
        ShowCommand::new(temp.path(), ResolveOptions::default(), args)
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn shows_summary() {
        let temp = project();
        let mut ui = MockUI::new();

        let result = run(&temp, ShowArgs::default(), &mut ui);

        assert!(result.success);
        assert_eq!(ui.headers(), ["NetworkSecurity 1.0.0"]);
        assert!(ui.has_message("Requires-Python: >=3.8"));
        assert!(ui.has_message("Install requires: 2"));
        assert!(ui.has_message("    pandas"));
        assert!(ui.has_message("    numpy"));
        assert!(!ui.has_message("-e ."));
    }

    #[test]
    fn verbose_lists_packages_and_classifiers() {
        let temp = project();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, ShowArgs::default(), &mut ui);

        assert!(ui.has_message("    networksecurity"));
        assert!(ui.has_message("    Topic :: Security"));
    }

    #[test]
    fn normal_mode_hides_package_names() {
        let temp = project();
        let mut ui = MockUI::new();

        run(&temp, ShowArgs::default(), &mut ui);

        assert!(ui.has_message("Packages: 1"));
        assert!(!ui.has_message("    networksecurity"));
    }

    #[test]
    fn json_output_has_resolved_fields() {
        let temp = project();
        let mut ui = MockUI::new();

        run(&temp, ShowArgs { json: true }, &mut ui);

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["metadata"]["name"], "NetworkSecurity");
        assert_eq!(value["install_requires"][1], "numpy");
        assert_eq!(value["packages"][0], "networksecurity");
        assert_eq!(value["long_description"]["content_type"], "text/markdown");
    }

    #[test]
    fn missing_readme_exits_two() {
        let temp = project();
        fs::remove_file(temp.path().join("README.md")).unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, ShowArgs::default(), &mut ui);

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Long description file not found"));
    }

    #[test]
    fn missing_manifest_still_shows_package() {
        let temp = project();
        fs::remove_file(temp.path().join("requirements.txt")).unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, ShowArgs::default(), &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("File containing requirements not found"));
        assert!(ui.has_message("Install requires: 0"));
    }
}
