use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Location of a field inside a payload, rendered as `categories[0].name`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Path of the payload itself
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path of a named field below this one
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Path of a sequence element below this one
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "$")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// What went wrong at the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("missing required field")]
    Missing,

    #[error("found {0}")]
    WrongType(&'static str),

    #[error("malformed value: {0}")]
    Malformed(String),

    #[error("must not be empty")]
    Empty,

    #[error("number out of range: {0}")]
    OutOfRange(String),
}

/// A payload did not match the expected shape.
///
/// Validation is total: whenever this error is returned no part of the
/// transformed value is observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{path}`: {kind} (expected {expected})")]
pub struct ValidationError {
    pub path: FieldPath,
    pub expected: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(path: &FieldPath, expected: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.clone(),
            expected: expected.into(),
            kind,
        }
    }

    pub fn missing(path: &FieldPath, expected: impl Into<String>) -> Self {
        Self::new(path, expected, ValidationErrorKind::Missing)
    }

    pub fn wrong_type(path: &FieldPath, expected: impl Into<String>, found: &Value) -> Self {
        Self::new(path, expected, ValidationErrorKind::WrongType(json_type_name(found)))
    }

    pub fn malformed(
        path: &FieldPath,
        expected: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(path, expected, ValidationErrorKind::Malformed(reason.into()))
    }

    pub fn empty(path: &FieldPath, expected: impl Into<String>) -> Self {
        Self::new(path, expected, ValidationErrorKind::Empty)
    }

    pub fn out_of_range(
        path: &FieldPath,
        expected: impl Into<String>,
        value: impl fmt::Display,
    ) -> Self {
        Self::new(path, expected, ValidationErrorKind::OutOfRange(value.to_string()))
    }

    /// Classify a serde data error raised at `path`.
    ///
    /// `shape` replaces serde's description of the expected type when the
    /// payload itself has the wrong type.
    pub(crate) fn from_serde(path: &FieldPath, message: &str, shape: &str) -> Self {
        if let Some(rest) = message.strip_prefix("missing field `") {
            let name = rest.trim_end_matches('`');
            return Self::missing(&path.field(name), "a value");
        }

        let (found, expected) = match message.rsplit_once(", expected ") {
            Some((found, expected)) => (found, expected),
            None => (message, shape),
        };

        if let Some(found) = found.strip_prefix("invalid type: ") {
            let expected = if path.is_root() { shape } else { expected };
            let kind = ValidationErrorKind::WrongType(unexpected_type_name(found));
            return Self::new(path, expected, kind);
        }

        if let Some(found) = found.strip_prefix("invalid value: ") {
            if let Some(number) = found.strip_prefix("integer `") {
                return Self::out_of_range(path, expected, number.trim_end_matches('`'));
            }
            return Self::malformed(path, expected, found);
        }

        Self::malformed(path, expected, found)
    }
}

/// JSON type name for serde's description of an unexpected value
fn unexpected_type_name(found: &str) -> &'static str {
    const NAMES: &[(&str, &str)] = &[
        ("null", "null"),
        ("unit", "null"),
        ("boolean", "boolean"),
        ("integer", "number"),
        ("floating point", "number"),
        ("string", "string"),
        ("character", "string"),
        ("sequence", "array"),
        ("map", "object"),
    ];

    NAMES
        .iter()
        .find(|(prefix, _)| found.starts_with(prefix))
        .map(|(_, name)| *name)
        .unwrap_or("value")
}

/// JSON type name used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_rendering() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "$");
        assert!(root.is_root());

        let path = root.field("categories").index(2).field("name");
        assert_eq!(path.as_str(), "categories[2].name");
        assert_eq!(root.index(0).as_str(), "[0]");
    }

    #[test]
    fn test_error_message_names_path_and_shape() {
        let path = FieldPath::root().field("id");
        let err = ValidationError::wrong_type(&path, "UUID string", &json!(42));
        assert_eq!(err.kind, ValidationErrorKind::WrongType("number"));
        assert_eq!(
            err.to_string(),
            "invalid `id`: found number (expected UUID string)"
        );
    }

    #[test]
    fn test_serde_messages_are_classified() {
        let path = FieldPath::root().field("languages").index(1);

        let err = ValidationError::from_serde(&path, "missing field `name`", "language object");
        assert_eq!(err.path.as_str(), "languages[1].name");
        assert_eq!(err.kind, ValidationErrorKind::Missing);

        let err = ValidationError::from_serde(
            &path.field("name"),
            "invalid type: integer `3`, expected a string",
            "language object",
        );
        assert_eq!(err.kind, ValidationErrorKind::WrongType("number"));
        assert_eq!(err.expected, "a string");

        let err = ValidationError::from_serde(
            &FieldPath::root(),
            "invalid type: sequence, expected struct MetadataDto",
            "metadata object",
        );
        assert_eq!(err.kind, ValidationErrorKind::WrongType("array"));
        assert_eq!(err.expected, "metadata object");

        let err = ValidationError::from_serde(
            &path,
            "invalid value: integer `-1`, expected non-negative integer",
            "count",
        );
        assert_eq!(err.kind, ValidationErrorKind::OutOfRange("-1".into()));

        let err = ValidationError::from_serde(
            &path,
            "invalid value: floating point `1.5`, expected non-negative integer",
            "count",
        );
        assert!(matches!(err.kind, ValidationErrorKind::Malformed(_)));
    }
}
