use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldPath, ValidationError, WireSchema, NAME_RULES};

/// Preferred IDE of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ide {
    pub name: String,
}

impl Ide {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self, path: &FieldPath) -> Result<(), ValidationError> {
        NAME_RULES.validate_string(&self.name, &path.field("name"), "non-empty string")
    }
}

impl WireSchema for Ide {
    const EXPECTED: &'static str = "ide object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        wire.validate(path)?;
        Ok(wire)
    }
}
