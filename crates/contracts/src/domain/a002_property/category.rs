use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldPath, ValidationError, WireSchema, NAME_RULES};

/// Project category, e.g. "Application" or "Library".
///
/// Value object: two categories are equal when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check user-entered data before it is sent to the backend
    pub fn validate(&self, path: &FieldPath) -> Result<(), ValidationError> {
        NAME_RULES.validate_string(&self.name, &path.field("name"), "non-empty string")
    }
}

impl WireSchema for Category {
    const EXPECTED: &'static str = "category object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        wire.validate(path)?;
        Ok(wire)
    }
}
