//! Python package discovery.
//!
//! A directory is an importable package when it holds `__init__.py` and
//! so does every directory between it and the project root. Hidden
//! directories and `__pycache__` are never searched.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Marker file that makes a directory a package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Find packages under `root`, returned as sorted dotted names.
///
/// Names equal to an `exclude` entry, or nested under one, are dropped.
pub fn find_packages(root: &Path, exclude: &[String]) -> Result<Vec<String>> {
    let mut found = Vec::new();
    walk(root, None, &mut found)?;

    found.retain(|name| !is_excluded(name, exclude));
    found.sort();
    tracing::debug!("Discovered {} package(s) under {}", found.len(), root.display());
    Ok(found)
}

fn walk(dir: &Path, prefix: Option<&str>, found: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with('.') || name == "__pycache__" {
            continue;
        }

        let path = entry.path();
        if !path.join(PACKAGE_MARKER).is_file() {
            continue;
        }

        let dotted = match prefix {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };
        walk(&path, Some(&dotted), found)?;
        found.push(dotted);
    }
    Ok(())
}

fn is_excluded(name: &str, exclude: &[String]) -> bool {
    exclude.iter().any(|ex| {
        name == ex
            || name
                .strip_prefix(ex.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
    })
}
