//! Requirement specifier types.
//!
//! A [`Requirement`] is kept as the exact text from the manifest. The
//! installer's resolver is the only consumer that interprets it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One installable dependency constraint, e.g. `pandas==1.5.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirement(String);

impl Requirement {
    /// Wrap a specifier token.
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    /// The specifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Requirement {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Ordered requirement specifiers, in manifest order.
///
/// Duplicates are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementList {
    items: Vec<Requirement>,
}

impl RequirementList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a requirement.
    pub fn push(&mut self, requirement: Requirement) {
        self.items.push(requirement);
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in manifest order.
    pub fn iter(&self) -> std::slice::Iter<'_, Requirement> {
        self.items.iter()
    }

    /// Copy out the specifiers as plain strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.items.iter().map(|r| r.0.clone()).collect()
    }

    /// Specifiers that appear more than once, each reported once, in order
    /// of first repetition.
    pub fn duplicates(&self) -> Vec<&Requirement> {
        let mut seen = std::collections::HashSet::new();
        let mut reported = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for req in &self.items {
            if !seen.insert(req) && reported.insert(req) {
                dups.push(req);
            }
        }
        dups
    }
}

impl FromIterator<Requirement> for RequirementList {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RequirementList {
    type Item = Requirement;
    type IntoIter = std::vec::IntoIter<Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RequirementList {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(specs: &[&str]) -> RequirementList {
        specs.iter().map(|s| Requirement::from(*s)).collect()
    }

    #[test]
    fn requirement_displays_verbatim() {
        let req = Requirement::new("scikit-learn>=1.2,<2");
        assert_eq!(req.to_string(), "scikit-learn>=1.2,<2");
        assert_eq!(req.as_str(), "scikit-learn>=1.2,<2");
    }

    #[test]
    fn list_preserves_order() {
        let reqs = list(&["b", "a", "c"]);
        assert_eq!(reqs.to_strings(), vec!["b", "a", "c"]);
        assert_eq!(reqs.len(), 3);
        assert!(!reqs.is_empty());
    }

    #[test]
    fn list_keeps_duplicates() {
        let reqs = list(&["numpy", "pandas", "numpy"]);
        assert_eq!(reqs.len(), 3);
    }

    #[test]
    fn duplicates_reports_each_repeat_once() {
        let reqs = list(&["numpy", "pandas", "numpy", "numpy", "pandas", "scipy"]);
        let dups: Vec<&str> = reqs.duplicates().iter().map(|r| r.as_str()).collect();
        assert_eq!(dups, vec!["numpy", "pandas"]);
    }

    #[test]
    fn duplicates_empty_for_unique_list() {
        assert!(list(&["a", "b"]).duplicates().is_empty());
    }

    #[test]
    fn serializes_as_string_array() {
        let reqs = list(&["pandas==1.5.0", "numpy>=1.21"]);
        let json = serde_json::to_string(&reqs).unwrap();
        assert_eq!(json, r#"["pandas==1.5.0","numpy>=1.21"]"#);
    }
}
