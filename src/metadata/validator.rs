//! Metadata validation rules.
//!
//! All rules run and every violation is collected, so one pass shows
//! everything that needs fixing:
//! - `invalid-name`: distribution name shape
//! - `invalid-version`: public release version shape
//! - `invalid-python-requires`: comma-separated version specifiers
//! - `invalid-author-email`: `local@domain`
//! - `invalid-classifier` / `duplicate-classifier`
//! - `empty-requirements-file`
//! - `multiline-field`: header fields must fit on one line

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{PackagingError, Result};

use super::schema::PackageMetadata;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap());

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)*((a|b|rc)\d+)?(\.post\d+)?(\.dev\d+)?$").unwrap()
});

static SPECIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(~=|===|==|!=|<=|>=|<|>)\s*[0-9][0-9A-Za-z.*+!-]*$").unwrap()
});

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Metadata field the rule applies to
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, field: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            field: field.to_string(),
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Validate metadata and return all violations.
pub fn validate_metadata(meta: &PackageMetadata) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_name(meta));
    errors.extend(validate_version(meta));
    errors.extend(validate_python_requires(meta));
    errors.extend(validate_author_email(meta));
    errors.extend(validate_classifiers(meta));
    errors.extend(validate_single_line(meta));

    if meta.requirements_file.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-requirements-file",
            "requirements_file",
            "requirements_file must not be empty".to_string(),
        ));
    }

    errors
}

/// Validate and fail with every violation joined into one message.
pub fn validate(meta: &PackageMetadata) -> Result<()> {
    let errors = validate_metadata(meta);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(PackagingError::MetadataValidationError { message })
}

fn validate_name(meta: &PackageMetadata) -> Option<ValidationError> {
    if NAME_RE.is_match(&meta.name) {
        return None;
    }
    Some(ValidationError::new(
        "invalid-name",
        "name",
        format!("name '{}' is not a valid distribution name", meta.name),
    ))
}

fn validate_version(meta: &PackageMetadata) -> Option<ValidationError> {
    if VERSION_RE.is_match(&meta.version) {
        return None;
    }
    Some(ValidationError::new(
        "invalid-version",
        "version",
        format!("version '{}' is not a valid version", meta.version),
    ))
}

fn validate_python_requires(meta: &PackageMetadata) -> Option<ValidationError> {
    let valid = meta
        .python_requires
        .split(',')
        .map(str::trim)
        .all(|spec| SPECIFIER_RE.is_match(spec));
    if valid {
        return None;
    }
    Some(ValidationError::new(
        "invalid-python-requires",
        "python_requires",
        format!(
            "python_requires '{}' is not a valid specifier set",
            meta.python_requires
        ),
    ))
}

fn validate_author_email(meta: &PackageMetadata) -> Option<ValidationError> {
    let valid = match meta.author_email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if valid {
        return None;
    }
    Some(ValidationError::new(
        "invalid-author-email",
        "author_email",
        format!("author_email '{}' is not an email address", meta.author_email),
    ))
}

fn validate_classifiers(meta: &PackageMetadata) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for classifier in &meta.classifiers {
        let segments: Vec<&str> = classifier.split(" :: ").collect();
        if segments.len() < 2 || segments.iter().any(|s| s.trim().is_empty()) {
            errors.push(ValidationError::new(
                "invalid-classifier",
                "classifiers",
                format!("classifier '{}' is not of the form 'A :: B'", classifier),
            ));
        }
        if !seen.insert(classifier.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-classifier",
                "classifiers",
                format!("classifier '{}' is listed more than once", classifier),
            ));
        }
    }

    errors
}

fn validate_single_line(meta: &PackageMetadata) -> Vec<ValidationError> {
    let mut fields = vec![
        ("name", meta.name.as_str()),
        ("version", meta.version.as_str()),
        ("description", meta.description.as_str()),
        ("author", meta.author.as_str()),
        ("author_email", meta.author_email.as_str()),
        ("url", meta.url.as_str()),
        ("python_requires", meta.python_requires.as_str()),
    ];
    if let Some(content_type) = &meta.long_description_content_type {
        fields.push(("long_description_content_type", content_type.as_str()));
    }
    fields.extend(meta.classifiers.iter().map(|c| ("classifiers", c.as_str())));

    fields
        .into_iter()
        .filter(|(_, value)| value.contains(['\n', '\r']))
        .map(|(field, _)| {
            ValidationError::new(
                "multiline-field",
                field,
                format!("{} must be a single line", field),
            )
        })
        .collect()
}
