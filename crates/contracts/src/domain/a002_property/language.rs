use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldPath, ValidationError, WireSchema, NAME_RULES};

/// Programming language used by a project, optionally pinned to a version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    pub fn validate(&self, path: &FieldPath) -> Result<(), ValidationError> {
        NAME_RULES.validate_string(&self.name, &path.field("name"), "non-empty string")
    }
}

impl WireSchema for Language {
    const EXPECTED: &'static str = "language object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        wire.validate(path)?;
        Ok(wire)
    }
}
