//! Backend wire shapes (snake_case) of a project record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::aggregate::{Metadata, MetadataId, MetadataPreview};
use crate::domain::a002_property::{BuildSystem, Category, Ide, Language};
use crate::shared::validation::{check_each, de_fields, FieldPath, ValidationError, WireSchema};

fn metadata_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<MetadataId, D::Error> {
    de_fields::hyphenated_uuid(deserializer).map(MetadataId)
}

fn check_names(
    path: &FieldPath,
    categories: &[Category],
    languages: &[Language],
) -> Result<(), ValidationError> {
    check_each(categories, &path.field("categories"), Category::validate)?;
    check_each(languages, &path.field("languages"), Language::validate)
}

/// DTO: full project record as sent and accepted by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDto {
    #[serde(deserialize_with = "metadata_id")]
    pub id: MetadataId,
    pub directory: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub languages: Vec<Language>,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub build_systems: Vec<BuildSystem>,
    /// Older backends spell this key `preffered_ide`
    #[serde(default, alias = "preffered_ide")]
    pub preferred_ide: Option<Ide>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(deserialize_with = "de_fields::rfc3339")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "de_fields::rfc3339")]
    pub updated: DateTime<Utc>,
}

impl WireSchema for MetadataDto {
    const EXPECTED: &'static str = "metadata object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        check_names(path, &wire.categories, &wire.languages)?;
        check_each(&wire.build_systems, &path.field("build_systems"), BuildSystem::validate)?;
        if let Some(ide) = &wire.preferred_ide {
            ide.validate(&path.field("preferred_ide"))?;
        }
        Ok(wire)
    }
}

impl From<MetadataDto> for Metadata {
    fn from(dto: MetadataDto) -> Self {
        Metadata {
            id: dto.id,
            title: dto.title,
            directory: dto.directory,
            description: dto.description,
            categories: dto.categories,
            languages: dto.languages,
            build_systems: dto.build_systems,
            preferred_ide: dto.preferred_ide,
            repository_url: dto.repository_url,
            created: dto.created,
            updated: dto.updated,
        }
    }
}

impl From<&Metadata> for MetadataDto {
    fn from(metadata: &Metadata) -> Self {
        MetadataDto {
            id: metadata.id,
            directory: metadata.directory.clone(),
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            categories: metadata.categories.clone(),
            languages: metadata.languages.clone(),
            build_systems: metadata.build_systems.clone(),
            preferred_ide: metadata.preferred_ide.clone(),
            repository_url: metadata.repository_url.clone(),
            created: metadata.created,
            updated: metadata.updated,
        }
    }
}

impl WireSchema for Metadata {
    const EXPECTED: &'static str = MetadataDto::EXPECTED;
    type Wire = MetadataDto;

    fn from_wire_shape(wire: MetadataDto, path: &FieldPath) -> Result<Self, ValidationError> {
        MetadataDto::from_wire_shape(wire, path).map(Into::into)
    }
}

/// DTO: list projection as sent by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataPreviewDto {
    #[serde(deserialize_with = "metadata_id")]
    pub id: MetadataId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "de_fields::rfc3339")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "de_fields::rfc3339")]
    pub updated: DateTime<Utc>,
}

impl WireSchema for MetadataPreviewDto {
    const EXPECTED: &'static str = "metadata preview object";
    type Wire = Self;

    fn from_wire_shape(wire: Self, path: &FieldPath) -> Result<Self, ValidationError> {
        check_names(path, &wire.categories, &wire.languages)?;
        Ok(wire)
    }
}

impl From<MetadataPreviewDto> for MetadataPreview {
    fn from(dto: MetadataPreviewDto) -> Self {
        MetadataPreview {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            categories: dto.categories,
            languages: dto.languages,
            created: dto.created,
            updated: dto.updated,
        }
    }
}

impl WireSchema for MetadataPreview {
    const EXPECTED: &'static str = MetadataPreviewDto::EXPECTED;
    type Wire = MetadataPreviewDto;

    fn from_wire_shape(wire: MetadataPreviewDto, path: &FieldPath) -> Result<Self, ValidationError> {
        MetadataPreviewDto::from_wire_shape(wire, path).map(Into::into)
    }
}
