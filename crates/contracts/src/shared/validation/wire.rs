//! Decoding of untyped backend payloads into derived wire DTOs
//!
//! Every inbound entity implements [`WireSchema`]: serde decodes its wire
//! shape, then `from_wire_shape` runs the checks serde cannot express
//! (non-empty names) and converts to the UI model. The first defect aborts
//! the whole read and its location is reported as a [`FieldPath`].

use serde::de::{self, DeserializeOwned, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use serde_path_to_error::Segment;
use std::fmt;
use uuid::Uuid;

use super::error::{FieldPath, ValidationError};

/// An entity that can be validated out of a raw backend value
pub trait WireSchema: Sized {
    /// Shape description used in error messages
    const EXPECTED: &'static str;

    /// What serde decodes before the entity checks run
    type Wire: DeserializeOwned;

    fn from_wire_shape(wire: Self::Wire, path: &FieldPath) -> Result<Self, ValidationError>;

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let wire = decode::<Self::Wire>(value, path, Self::EXPECTED)?;
        Self::from_wire_shape(wire, path)
    }
}

fn extend(base: &FieldPath, path: &serde_path_to_error::Path) -> FieldPath {
    path.iter().fold(base.clone(), |acc, segment| match segment {
        Segment::Seq { index } => acc.index(*index),
        Segment::Map { key } => acc.field(key),
        Segment::Enum { variant } => acc.field(variant),
        _ => acc.field("?"),
    })
}

/// Deserialize `value` into `T`, reporting failures below `path`
pub fn decode<T: DeserializeOwned>(
    value: &Value,
    path: &FieldPath,
    shape: &str,
) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let at = extend(path, e.path());
        ValidationError::from_serde(&at, &e.inner().to_string(), shape)
    })
}

/// A JSON array of schema-backed entities, in order
pub fn read_list<T: WireSchema>(value: &Value, path: &FieldPath) -> Result<Vec<T>, ValidationError> {
    let items = decode::<Vec<T::Wire>>(value, path, "array")?;
    convert_each(items, path, T::from_wire_shape)
}

/// Convert decoded elements in order, stopping at the first failure
pub fn convert_each<W, T>(
    items: Vec<W>,
    path: &FieldPath,
    convert: impl Fn(W, &FieldPath) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| convert(item, &path.index(index)))
        .collect()
}

/// Check every element of a decoded list with its indexed path
pub fn check_each<T>(
    items: &[T],
    path: &FieldPath,
    check: impl Fn(&T, &FieldPath) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| check(item, &path.index(index)))
}

/// Hyphenated UUID, e.g. `123e4567-e89b-12d3-a456-426614174000`
pub fn parse_hyphenated(raw: &str) -> Result<Uuid, String> {
    // parse_str also takes simple, braced and urn forms
    if raw.len() != 36 {
        return Err(format!("`{}` is not a hyphenated UUID", raw));
    }
    Uuid::parse_str(raw).map_err(|e| format!("`{}`: {}", raw, e))
}

// ============================================================================
// Field deserializers
// ============================================================================

/// `deserialize_with` helpers for wire DTO fields
pub mod de_fields {
    use super::*;
    use chrono::{DateTime, Utc};

    /// A missing or `null` list is empty
    pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    pub fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_hyphenated(&raw)
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&raw), &"hyphenated UUID string"))
    }

    /// RFC 3339 timestamp, e.g. `2023-01-01T00:00:00.000Z`
    pub fn rfc3339<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&raw), &"ISO-8601 timestamp string"))
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Count::deserialize(deserializer).map(|c| c.0)
    }

    /// JSON object of key -> count as a list, in received order
    pub fn ordered_counts<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Non-negative integer that fits `u32`.
///
/// Integral floats are accepted because numbers crossing the JS bridge may
/// arrive as `f64`; fractional values are rejected, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count(pub u32);

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const EXPECTED: &str = "non-negative integer";
        let number = Number::deserialize(deserializer)?;

        if let Some(n) = number.as_u64() {
            return u32::try_from(n)
                .map(Count)
                .map_err(|_| de::Error::invalid_value(Unexpected::Unsigned(n), &EXPECTED));
        }
        if let Some(n) = number.as_i64() {
            return Err(de::Error::invalid_value(Unexpected::Signed(n), &EXPECTED));
        }

        match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => Ok(Count(f as u32)),
            Some(f) if f.is_finite() && f.fract() == 0.0 && f < 0.0 => {
                Err(de::Error::invalid_value(Unexpected::Signed(f as i64), &EXPECTED))
            }
            Some(f) if f.is_finite() && f.fract() == 0.0 => {
                Err(de::Error::invalid_value(Unexpected::Unsigned(f as u64), &EXPECTED))
            }
            Some(f) => Err(de::Error::invalid_value(Unexpected::Float(f), &EXPECTED)),
            None => Err(de::Error::custom(format!("{} is not a number", number))),
        }
    }
}

struct CountsVisitor;

impl<'de> Visitor<'de> for CountsVisitor {
    type Value = Vec<(String, u32)>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("object of counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, count)) = map.next_entry::<String, Count>()? {
            entries.push((key, count.0));
        }
        Ok(entries)
    }
}

impl WireSchema for u32 {
    const EXPECTED: &'static str = "non-negative integer";
    type Wire = Count;

    fn from_wire_shape(wire: Count, _path: &FieldPath) -> Result<Self, ValidationError> {
        Ok(wire.0)
    }
}
