//! JSON Schema generation for `package.yml`.
//!
//! Produces a Draft-07 schema so editors can autocomplete and check the
//! metadata file.

use serde_json::{json, Value};

use super::schema::PackageMetadata;

/// Generates JSON Schema for package metadata.
#[derive(Debug, Default)]
pub struct SchemaGenerator {
    defaults: PackageMetadata,
}

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the complete schema.
    pub fn generate(&self) -> Value {
        let d = &self.defaults;
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Package Metadata",
            "description": "Packaging metadata for the NetworkSecurity project",
            "type": "object",
            "properties": {
                "name": string_field("Distribution name", &d.name),
                "version": {
                    "type": ["string", "number"],
                    "default": d.version,
                    "description": "Release version"
                },
                "author": string_field("Author display name", &d.author),
                "author_email": string_field("Author contact address", &d.author_email),
                "description": string_field("One-line summary", &d.description),
                "long_description_file": string_field(
                    "File holding the long description, relative to the project root",
                    &d.long_description_file.to_string_lossy(),
                ),
                "long_description_content_type": {
                    "type": "string",
                    "examples": ["text/markdown", "text/x-rst", "text/plain"],
                    "description": "MIME type of the long description (inferred from the file extension when omitted)"
                },
                "url": string_field("Project home page", &d.url),
                "python_requires": string_field("Supported interpreter versions", &d.python_requires),
                "classifiers": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": d.classifiers,
                    "description": "Trove classifiers"
                },
                "requirements_file": string_field(
                    "Requirement manifest, relative to the project root",
                    &d.requirements_file.to_string_lossy(),
                ),
                "exclude_packages": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Dotted package prefixes to leave out of package discovery"
                }
            },
            "additionalProperties": false
        })
    }
}

fn string_field(description: &str, default: &str) -> Value {
    json!({
        "type": "string",
        "default": default,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_draft_07_object() {
        let schema = SchemaGenerator::new().generate();
        assert_eq!(
            schema["$schema"],
            "http://json-schema.org/draft-07/schema#"
        );
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn schema_covers_every_metadata_field() {
        let schema = SchemaGenerator::new().generate();
        let yaml = serde_yaml::to_value(PackageMetadata {
            long_description_content_type: Some("text/plain".to_string()),
            exclude_packages: vec!["tests".to_string()],
            ..Default::default()
        })
        .unwrap();

        let properties = schema["properties"].as_object().unwrap();
        for key in yaml.as_mapping().unwrap().keys() {
            let key = key.as_str().unwrap();
            assert!(properties.contains_key(key), "schema missing '{}'", key);
        }
    }

    #[test]
    fn schema_carries_defaults() {
        let schema = SchemaGenerator::new().generate();
        assert_eq!(schema["properties"]["name"]["default"], "NetworkSecurity");
        assert_eq!(schema["properties"]["python_requires"]["default"], ">=3.8");
        assert_eq!(
            schema["properties"]["classifiers"]["default"]
                .as_array()
                .unwrap()
                .len(),
            10
        );
    }
}
