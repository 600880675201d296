//! Core metadata (`PKG-INFO`) rendering.
//!
//! Emits Metadata-Version 2.1: header fields one per line, then a blank
//! line, then the long description as the message body.

use std::fmt::Write;

use super::resolved::ResolvedPackage;

/// Core metadata version written in the header.
pub const METADATA_VERSION: &str = "2.1";

/// Render a resolved package as `PKG-INFO` text.
pub fn render_pkg_info(pkg: &ResolvedPackage) -> String {
    let meta = &pkg.metadata;
    let mut out = String::new();

    field(&mut out, "Metadata-Version", METADATA_VERSION);
    field(&mut out, "Name", &meta.name);
    field(&mut out, "Version", &meta.version);
    field(&mut out, "Summary", &meta.description);
    field(&mut out, "Home-page", &meta.url);
    field(&mut out, "Author", &meta.author);
    field(&mut out, "Author-email", &meta.author_email);
    for classifier in &meta.classifiers {
        field(&mut out, "Classifier", classifier);
    }
    field(&mut out, "Requires-Python", &meta.python_requires);
    field(
        &mut out,
        "Description-Content-Type",
        &pkg.long_description.content_type,
    );
    for requirement in &pkg.install_requires {
        field(&mut out, "Requires-Dist", requirement.as_str());
    }

    out.push('\n');
    out.push_str(&pkg.long_description.text);
    out
}

fn field(out: &mut String, name: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}: {}", name, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{LongDescription, PackageMetadata};
    use crate::requirements::parse_requirements;
    use std::path::PathBuf;

    fn resolved(requirements: &str) -> ResolvedPackage {
        ResolvedPackage {
            metadata: PackageMetadata {
                classifiers: vec!["Topic :: Security".to_string()],
                ..Default::default()
            },
            long_description: LongDescription {
                text: "# NetworkSecurity\n".to_string(),
                content_type: "text/markdown".to_string(),
            },
            packages: vec!["networksecurity".to_string()],
            install_requires: parse_requirements(requirements),
            requirements_manifest: PathBuf::from("requirements.txt"),
            requirements_found: true,
        }
    }

    #[test]
    fn renders_full_document() {
        let text = render_pkg_info(&resolved("pandas==1.5.0\n-e .\nnumpy>=1.21\n"));
        let expected = "\
Metadata-Version: 2.1
Name: NetworkSecurity
Version: 1.0.0
Summary: Network Intrusion Detection System using Machine Learning on UNSW-NB15 Dataset
Home-page: https://github.com/yourusername/network_security
Author: Your Name
Author-email: your.email@example.com
Classifier: Topic :: Security
Requires-Python: >=3.8
Description-Content-Type: text/markdown
Requires-Dist: pandas==1.5.0
Requires-Dist: numpy>=1.21

# NetworkSecurity
";
        assert_eq!(text, expected);
    }

    #[test]
    fn no_requirements_means_no_requires_dist() {
        let text = render_pkg_info(&resolved(""));
        assert!(!text.contains("Requires-Dist"));
        assert!(text.contains("Requires-Python: >=3.8\n"));
    }

    #[test]
    fn requirement_order_is_preserved() {
        let text = render_pkg_info(&resolved("zeta\nalpha\n"));
        let zeta = text.find("Requires-Dist: zeta").unwrap();
        let alpha = text.find("Requires-Dist: alpha").unwrap();
        assert!(zeta < alpha);
    }
}
