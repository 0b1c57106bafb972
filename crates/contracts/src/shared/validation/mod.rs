//! Validation of payloads crossing the backend boundary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::validation::{FieldPath, WireSchema};
//!
//! let category = Category::from_wire(&raw, &FieldPath::root())?;
//! ```

mod error;
mod rules;
mod wire;

pub use error::{FieldPath, ValidationError, ValidationErrorKind};
pub use rules::{ValidationRules, NAME_RULES};
pub use wire::{
    check_each, convert_each, de_fields, decode, parse_hyphenated, read_list, Count, WireSchema,
};
