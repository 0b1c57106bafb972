use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::a002_property::{BuildSystem, Category, Ide, Language};
use crate::domain::common::AggregateId;
use crate::shared::validation::{parse_hyphenated, FieldPath, ValidationError, WireSchema};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a project record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataId(pub Uuid);

impl MetadataId {
    /// Reserved id of a record that has not been saved yet
    pub const UNSAVED: MetadataId = MetadataId(Uuid::nil());

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn is_unsaved(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for MetadataId {
    fn default() -> Self {
        Self::UNSAVED
    }
}

impl AggregateId for MetadataId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, ValidationError> {
        Uuid::from_string(s).map(MetadataId)
    }
}

/// Ids returned bare by `create_metadata` and `load_from_file`
impl WireSchema for MetadataId {
    const EXPECTED: &'static str = "hyphenated UUID string";
    type Wire = String;

    fn from_wire_shape(wire: String, path: &FieldPath) -> Result<Self, ValidationError> {
        parse_hyphenated(&wire)
            .map(MetadataId)
            .map_err(|reason| ValidationError::malformed(path, Self::EXPECTED, reason))
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for MetadataId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

// ============================================================================
// UI models
// ============================================================================

/// Full project record as the UI sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: MetadataId,
    pub title: String,
    pub directory: String,
    pub description: Option<String>,
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub build_systems: Vec<BuildSystem>,
    pub preferred_ide: Option<Ide>,
    pub repository_url: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Metadata {
    pub fn is_saved(&self) -> bool {
        !self.id.is_unsaved()
    }

    /// Lighter projection used by list views
    pub fn preview(&self) -> MetadataPreview {
        MetadataPreview {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
            languages: self.languages.clone(),
            created: self.created,
            updated: self.updated,
        }
    }
}

/// List-view projection of a project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPreview {
    pub id: MetadataId,
    pub title: String,
    pub description: Option<String>,
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}
