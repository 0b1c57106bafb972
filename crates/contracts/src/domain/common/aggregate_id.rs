use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

use crate::shared::validation::{parse_hyphenated, FieldPath, ValidationError};

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as it travels over the wire
    fn as_string(&self) -> String;

    /// Parse an id received as a string
    fn from_string(s: &str) -> Result<Self, ValidationError>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        self.hyphenated().to_string()
    }

    fn from_string(s: &str) -> Result<Self, ValidationError> {
        parse_hyphenated(s)
            .map_err(|reason| ValidationError::malformed(&FieldPath::root(), "hyphenated UUID", reason))
    }
}
