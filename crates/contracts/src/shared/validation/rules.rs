//! Validation rules for user-entered and received string fields

use super::error::{FieldPath, ValidationError};

/// Validation rules for a string field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self { required: false }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self { required: true }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(
        &self,
        value: &str,
        path: &FieldPath,
        expected: &'static str,
    ) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::empty(path, expected));
        }
        Ok(())
    }
}

/// Names of categories, languages, build systems and IDEs
pub const NAME_RULES: ValidationRules = ValidationRules::required();
