//! Template store loading.
//!
//! The store is a single JSON document file: an array of flat objects with
//! string values. Each record carries a mandatory non-empty `name`; every
//! other entry maps a field name to one of the four type tags. Records that
//! break the contract are skipped and reported to the caller, never
//! silently dropped. The store is read-only here; `fieldmap init` is the
//! only writer.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::{FieldType, Template};
use crate::errors::{FieldmapError, Result};

/// Everything a store file yielded: valid templates in file order, plus one
/// issue per skipped record. File order is the tie-break order for
/// matching, so it must be preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContents {
    pub templates: Vec<Template>,
    pub issues: Vec<RecordIssue>,
}

/// A store record that was skipped, and where it sat in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Zero-based position of the record in the store array
    pub index: usize,
    pub reason: SkipReason,
}

/// Why a store record was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Record is not a JSON object
    NotAnObject,
    /// `name` key missing, empty, or not a string
    MissingName,
    /// A field value is not a string
    NonStringField { field: String },
    /// A field carries a tag outside the four known types
    UnknownTypeTag { field: String, tag: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "record is not an object"),
            SkipReason::MissingName => write!(f, "missing or empty 'name' key"),
            SkipReason::NonStringField { field } => {
                write!(f, "field '{field}' does not hold a string")
            }
            SkipReason::UnknownTypeTag { field, tag } => {
                write!(f, "field '{field}' has unknown type tag '{tag}'")
            }
        }
    }
}

/// Load the template store from disk. An absent or unreadable file is
/// fatal, as is a document that is not an array of records.
pub fn load_templates(path: &Path) -> Result<StoreContents> {
    let content = fs::read_to_string(path).map_err(|source| FieldmapError::Store {
        message: format!("failed to read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })?;
    parse_store(&content, Some(path))
}

/// Parse store document text into templates and per-record issues
pub fn parse_store(content: &str, path: Option<&Path>) -> Result<StoreContents> {
    let document: Value =
        serde_json::from_str(content).map_err(|error| FieldmapError::StoreFormat {
            message: format!("not valid JSON: {error}"),
            path: path.map(Path::to_path_buf),
        })?;

    let records = document
        .as_array()
        .ok_or_else(|| FieldmapError::StoreFormat {
            message: "expected a top-level array of template records".to_string(),
            path: path.map(Path::to_path_buf),
        })?;

    let mut templates = Vec::new();
    let mut issues = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match convert_record(record) {
            Ok(template) => templates.push(template),
            Err(reason) => issues.push(RecordIssue { index, reason }),
        }
    }

    Ok(StoreContents { templates, issues })
}

// Pure conversion of one record object into a typed template
fn convert_record(record: &Value) -> std::result::Result<Template, SkipReason> {
    let object = record.as_object().ok_or(SkipReason::NotAnObject)?;

    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(SkipReason::MissingName),
    };

    let mut fields = HashMap::new();
    for (key, value) in object {
        if key == "name" {
            continue;
        }
        let tag = value.as_str().ok_or_else(|| SkipReason::NonStringField {
            field: key.clone(),
        })?;
        let field_type = tag
            .parse::<FieldType>()
            .map_err(|_| SkipReason::UnknownTypeTag {
                field: key.clone(),
                tag: tag.to_string(),
            })?;
        fields.insert(key.clone(), field_type);
    }

    Ok(Template { name, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_store_valid_records() {
        let content = indoc! {r#"
            [
              { "name": "User Data", "login": "email", "tel": "phone" },
              { "name": "Order Form", "customer": "text", "order_date": "date" }
            ]
        "#};

        let contents = parse_store(content, None).unwrap();
        assert_eq!(contents.templates.len(), 2);
        assert!(contents.issues.is_empty());
        assert_eq!(contents.templates[0].name, "User Data");
        assert_eq!(
            contents.templates[0].fields.get("login"),
            Some(&FieldType::Email)
        );
        assert_eq!(
            contents.templates[1].fields.get("order_date"),
            Some(&FieldType::Date)
        );
    }

    #[test]
    fn test_parse_store_preserves_file_order() {
        let content = r#"[{"name": "B"}, {"name": "A"}, {"name": "C"}]"#;
        let contents = parse_store(content, None).unwrap();
        let names: Vec<&str> = contents
            .templates
            .iter()
            .map(|template| template.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_store_skips_nameless_records() {
        let content = indoc! {r#"
            [
              { "login": "email" },
              { "name": "", "login": "email" },
              { "name": 42, "login": "email" },
              { "name": "Kept" }
            ]
        "#};

        let contents = parse_store(content, None).unwrap();
        assert_eq!(contents.templates.len(), 1);
        assert_eq!(contents.templates[0].name, "Kept");
        assert_eq!(contents.issues.len(), 3);
        assert!(contents
            .issues
            .iter()
            .all(|issue| issue.reason == SkipReason::MissingName));
    }

    #[test]
    fn test_parse_store_skips_unknown_type_tags() {
        let content = r#"[{"name": "Typo", "login": "e-mail"}]"#;
        let contents = parse_store(content, None).unwrap();
        assert!(contents.templates.is_empty());
        assert_eq!(
            contents.issues,
            vec![RecordIssue {
                index: 0,
                reason: SkipReason::UnknownTypeTag {
                    field: "login".to_string(),
                    tag: "e-mail".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_parse_store_skips_non_string_fields() {
        let content = r#"[{"name": "Nested", "login": {"type": "email"}}]"#;
        let contents = parse_store(content, None).unwrap();
        assert!(contents.templates.is_empty());
        assert_eq!(
            contents.issues[0].reason,
            SkipReason::NonStringField {
                field: "login".to_string()
            }
        );
    }

    #[test]
    fn test_parse_store_skips_non_object_records() {
        let content = r#"["just a string", {"name": "Kept"}]"#;
        let contents = parse_store(content, None).unwrap();
        assert_eq!(contents.templates.len(), 1);
        assert_eq!(contents.issues[0].reason, SkipReason::NotAnObject);
        assert_eq!(contents.issues[0].index, 0);
    }

    #[test]
    fn test_parse_store_rejects_non_array_document() {
        let error = parse_store(r#"{"name": "Not An Array"}"#, None).unwrap_err();
        assert!(matches!(error, FieldmapError::StoreFormat { .. }));
    }

    #[test]
    fn test_parse_store_rejects_invalid_json() {
        let error = parse_store("not json at all", None).unwrap_err();
        assert!(matches!(error, FieldmapError::StoreFormat { .. }));
    }

    #[test]
    fn test_load_templates_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("db.json");
        fs::write(&store_path, r#"[{"name": "User Data", "login": "email"}]"#).unwrap();

        let contents = load_templates(&store_path).unwrap();
        assert_eq!(contents.templates.len(), 1);
        assert_eq!(contents.templates[0].name, "User Data");
    }

    #[test]
    fn test_load_templates_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let error = load_templates(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(error, FieldmapError::Store { .. }));
    }
}
