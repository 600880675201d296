//! PKG-INFO command implementation.
//!
//! The `netsec-pkg pkg-info` command renders core metadata to stdout or
//! writes it to a file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::PkgInfoArgs;
use crate::error::Result;
use crate::package::{render_pkg_info, ResolveOptions, ResolvedPackage};
use crate::ui::UserInterface;

use super::dispatcher::{report_metadata_error, Command, CommandResult};

/// The pkg-info command implementation.
pub struct PkgInfoCommand {
    project_root: PathBuf,
    options: ResolveOptions,
    args: PkgInfoArgs,
}

impl PkgInfoCommand {
    /// Create a new pkg-info command.
    pub fn new(project_root: &Path, options: ResolveOptions, args: PkgInfoArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for PkgInfoCommand {
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

        let text = render_pkg_info(&pkg);

        match &self.args.output {
            Some(path) => {
                let path = self.project_root.join(path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, &text)?;
                tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
                ui.success(&format!("Wrote {}", path.display()));
            }
            None => {
                // The body already ends the document; avoid a doubled newline.
                ui.message(text.strip_suffix('\n').unwrap_or(&text));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# NetworkSecurity\n").unwrap();
        fs::write(temp.path().join("requirements.txt"), "pandas==1.5.0\n").unwrap();
        temp
    }

    #[test]
    fn prints_to_ui_by_default() {
        let temp = project();
        let mut ui = MockUI::new();

        let result = PkgInfoCommand::new(temp.path(), ResolveOptions::default(), PkgInfoArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let text = &ui.messages()[0];
        assert!(text.starts_with("Metadata-Version: 2.1\nName: NetworkSecurity\n"));
        assert!(text.contains("Requires-Dist: pandas==1.5.0\n"));
        assert!(text.ends_with("# NetworkSecurity"));
    }

    #[test]
    fn writes_file_relative_to_project() {
        let temp = project();
        let mut ui = MockUI::new();
        let args = PkgInfoArgs {
            output: Some(PathBuf::from("build/PKG-INFO")),
        };

        PkgInfoCommand::new(temp.path(), ResolveOptions::default(), args)
            .execute(&mut ui)
            .unwrap();

        let written = fs::read_to_string(temp.path().join("build/PKG-INFO")).unwrap();
        assert!(written.contains("Name: NetworkSecurity\n"));
        assert!(written.ends_with("# NetworkSecurity\n"));
        assert!(ui.has_success("PKG-INFO"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn invalid_metadata_exits_two() {
        let temp = project();
        fs::write(temp.path().join("package.yml"), "python_requires: three").unwrap();
        let mut ui = MockUI::new();

        let result = PkgInfoCommand::new(temp.path(), ResolveOptions::default(), PkgInfoArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("python_requires"));
    }
}
