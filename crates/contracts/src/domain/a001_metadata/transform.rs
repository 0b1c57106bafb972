//! Entry points of the backend -> UI transform
//!
//! Each function takes an untyped value as received from the backend and
//! either returns a fully populated UI model or a [`ValidationError`].

use serde_json::Value;

use super::aggregate::{Metadata, MetadataPreview};
use crate::shared::paging::PagedMetadataPreview;
use crate::shared::validation::{read_list, FieldPath, ValidationError, WireSchema};

/// Validate a full project record and convert it to UI shape
pub fn validate_and_transform(raw: &Value) -> Result<Metadata, ValidationError> {
    Metadata::from_wire(raw, &FieldPath::root())
}

/// Validate a list projection and convert it to UI shape
pub fn validate_and_transform_preview(raw: &Value) -> Result<MetadataPreview, ValidationError> {
    MetadataPreview::from_wire(raw, &FieldPath::root())
}

/// Validate an array of entities; the first invalid element fails the whole list
pub fn validate_and_transform_list<T: WireSchema>(raw: &Value) -> Result<Vec<T>, ValidationError> {
    read_list(raw, &FieldPath::root())
}

/// Validate a page envelope and its previews
pub fn validate_and_transform_paged(raw: &Value) -> Result<PagedMetadataPreview, ValidationError> {
    PagedMetadataPreview::from_wire(raw, &FieldPath::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_property::{Category, Language};
    use crate::shared::validation::ValidationErrorKind;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn received() -> Value {
        json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "title": "T",
            "directory": "/d",
            "categories": [{ "name": "C" }],
            "languages": [{ "name": "L" }],
            "build_systems": [],
            "preffered_ide": null,
            "repository_url": null,
            "created": "2023-01-01T00:00:00.000Z",
            "updated": "2023-01-02T00:00:00.000Z"
        })
    }

    #[test]
    fn test_parse_valid_metadata() {
        let metadata = validate_and_transform(&received()).unwrap();

        assert_eq!(metadata.id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(metadata.title, "T");
        assert_eq!(metadata.directory, "/d");
        assert_eq!(metadata.description, None);
        assert_eq!(metadata.categories, vec![Category::new("C")]);
        assert_eq!(metadata.languages, vec![Language::new("L")]);
        assert!(metadata.build_systems.is_empty());
        assert_eq!(metadata.preferred_ide, None);
        assert_eq!(metadata.repository_url, None);
        assert_eq!(metadata.created, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(metadata.updated, Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_optional_present_iff_source_present() {
        let mut raw = received();
        raw["description"] = json!("A valid description.");
        raw["repository_url"] = json!("https://example.com/repo.git");

        let metadata = validate_and_transform(&raw).unwrap();
        assert_eq!(metadata.description.as_deref(), Some("A valid description."));
        assert_eq!(
            metadata.repository_url.as_deref(),
            Some("https://example.com/repo.git")
        );

        raw.as_object_mut().unwrap().remove("repository_url");
        let metadata = validate_and_transform(&raw).unwrap();
        assert_eq!(metadata.repository_url, None);
    }

    #[test]
    fn test_missing_title_fails() {
        let mut raw = received();
        raw.as_object_mut().unwrap().remove("title");

        let err = validate_and_transform(&raw).unwrap_err();
        assert_eq!(err.path.as_str(), "title");
        assert_eq!(err.kind, ValidationErrorKind::Missing);
    }

    #[test]
    fn test_invalid_metadata_fails() {
        let invalid = json!({
            "id": "invalid-uuid",
            "title": "Valid Title",
            "directory": "/path/to/project"
        });

        let err = validate_and_transform(&invalid).unwrap_err();
        assert_eq!(err.path.as_str(), "id");
    }

    #[test]
    fn test_malformed_date_fails() {
        let mut raw = received();
        raw["updated"] = json!("yesterday");

        let err = validate_and_transform(&raw).unwrap_err();
        assert_eq!(err.path.as_str(), "updated");
        assert!(matches!(err.kind, ValidationErrorKind::Malformed(_)));
    }

    #[test]
    fn test_nested_defect_reports_full_path() {
        let mut raw = received();
        raw["languages"] = json!([{ "name": "Rust" }, { "name": 3 }]);

        let err = validate_and_transform(&raw).unwrap_err();
        assert_eq!(err.path.as_str(), "languages[1].name");
        assert_eq!(err.kind, ValidationErrorKind::WrongType("number"));
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let mut raw = received();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("categories");
        obj.insert("languages".into(), Value::Null);

        let metadata = validate_and_transform(&raw).unwrap();
        assert!(metadata.categories.is_empty());
        assert!(metadata.languages.is_empty());
    }

    #[test]
    fn test_list_transform() {
        let empty: Vec<Metadata> = validate_and_transform_list(&json!([])).unwrap();
        assert!(empty.is_empty());

        let err = validate_and_transform_list::<Metadata>(&json!({"data": []})).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::WrongType("object"));

        let two: Vec<Metadata> =
            validate_and_transform_list(&json!([received(), received()])).unwrap();
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_list_fails_on_first_bad_element() {
        let mut bad = received();
        bad["id"] = json!(17);

        let err = validate_and_transform_list::<Metadata>(&json!([received(), bad, {}]))
            .unwrap_err();
        assert_eq!(err.path.as_str(), "[1].id");
    }

    #[test]
    fn test_preview_transform() {
        let preview = validate_and_transform_preview(&json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "title": "T",
            "description": null,
            "categories": [],
            "languages": [{ "name": "Rust", "version": "1.85" }],
            "created": "2023-01-01T00:00:00Z",
            "updated": "2023-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(preview.languages, vec![Language::with_version("Rust", "1.85")]);
        assert_eq!(preview.description, None);
    }
}
