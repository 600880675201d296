//! Package metadata schema.
//!
//! Maps to `package.yml`. Every field is optional in the file; missing
//! fields fall back to the project's declared defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageMetadata {
    /// Distribution name
    pub name: String,

    /// Release version
    #[serde(deserialize_with = "version_string")]
    pub version: String,

    /// Author display name
    pub author: String,

    /// Author contact address
    pub author_email: String,

    /// One-line summary
    pub description: String,

    /// File holding the long description, relative to the project root
    pub long_description_file: PathBuf,

    /// MIME type of the long description (inferred from the file when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description_content_type: Option<String>,

    /// Project home page
    pub url: String,

    /// Supported interpreter versions
    pub python_requires: String,

    /// Trove classifiers
    pub classifiers: Vec<String>,

    /// Requirement manifest, relative to the project root
    pub requirements_file: PathBuf,

    /// Dotted package prefixes to leave out of package discovery
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_packages: Vec<String>,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            name: "NetworkSecurity".to_string(),
            version: "1.0.0".to_string(),
            author: "Your Name".to_string(),
            author_email: "your.email@example.com".to_string(),
            description:
                "Network Intrusion Detection System using Machine Learning on UNSW-NB15 Dataset"
                    .to_string(),
            long_description_file: PathBuf::from("README.md"),
            long_description_content_type: None,
            url: "https://github.com/yourusername/network_security".to_string(),
            python_requires: ">=3.8".to_string(),
            classifiers: default_classifiers(),
            requirements_file: PathBuf::from(crate::requirements::REQUIREMENTS_FILE),
            exclude_packages: Vec::new(),
        }
    }
}

/// Accept `version: 2` as well as quoted strings.
///
/// YAML floats are rejected: `1.10` would already have become `1.1`.
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        serde_yaml::Value::Number(n) => Err(D::Error::custom(format!(
            "version {} must be quoted, e.g. version: \"{}\"",
            n, n
        ))),
        other => Err(D::Error::custom(format!(
            "expected a version string, found {:?}",
            other
        ))),
    }
}

fn default_classifiers() -> Vec<String> {
    [
        "Programming Language :: Python :: 3",
        "Programming Language :: Python :: 3.8",
        "Programming Language :: Python :: 3.9",
        "Programming Language :: Python :: 3.10",
        "License :: OSI Approved :: MIT License",
        "Operating System :: OS Independent",
        "Development Status :: 4 - Beta",
        "Intended Audience :: Developers",
        "Topic :: Scientific/Engineering :: Artificial Intelligence",
        "Topic :: Security",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_project_declaration() {
        let meta = PackageMetadata::default();
        assert_eq!(meta.name, "NetworkSecurity");
        assert_eq!(meta.version, "1.0.0");
        assert_eq!(meta.python_requires, ">=3.8");
        assert_eq!(meta.long_description_file, PathBuf::from("README.md"));
        assert_eq!(meta.requirements_file, PathBuf::from("requirements.txt"));
        assert_eq!(meta.classifiers.len(), 10);
        assert!(meta.classifiers.contains(&"Topic :: Security".to_string()));
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let meta: PackageMetadata = serde_yaml::from_str("{}").unwrap();
        assert_eq!(meta, PackageMetadata::default());
    }

    #[test]
    fn partial_yaml_overrides_fields() {
        let meta: PackageMetadata =
            serde_yaml::from_str("version: 1.1.0\nauthor: Ada").unwrap();
        assert_eq!(meta.version, "1.1.0");
        assert_eq!(meta.author, "Ada");
        assert_eq!(meta.name, "NetworkSecurity");
    }

    #[test]
    fn numeric_version_is_accepted() {
        let meta: PackageMetadata = serde_yaml::from_str("version: 2").unwrap();
        assert_eq!(meta.version, "2");
    }

    #[test]
    fn float_version_is_rejected() {
        let result = serde_yaml::from_str::<PackageMetadata>("version: 1.10");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("must be quoted"));
    }

    #[test]
    fn quoted_version_keeps_trailing_zero() {
        let meta: PackageMetadata = serde_yaml::from_str("version: \"1.10\"").unwrap();
        assert_eq!(meta.version, "1.10");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<PackageMetadata, _> = serde_yaml::from_str("nmae: typo");
        assert!(result.is_err());
    }

    #[test]
    fn content_type_omitted_when_unset() {
        let yaml = serde_yaml::to_string(&PackageMetadata::default()).unwrap();
        assert!(!yaml.contains("long_description_content_type"));
        assert!(!yaml.contains("exclude_packages"));
    }
}
