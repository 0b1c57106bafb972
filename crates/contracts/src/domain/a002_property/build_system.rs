use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldPath, ValidationError, WireSchema, NAME_RULES};

/// Build system of a project, e.g. "Cargo"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildSystem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BuildSystem {
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

impl WireSchema for BuildSystem {
    const EXPECTED: &'static str = "build system object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        wire.validate(path)?;
        Ok(wire)
    }
}
