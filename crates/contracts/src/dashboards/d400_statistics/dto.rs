use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::validation::{de_fields, FieldPath, ValidationError, WireSchema};

/// Number of projects sharing one key (a language, IDE, category or build system)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticEntry {
    pub key: String,
    pub count: u32,
}

impl From<(String, u32)> for StatisticEntry {
    fn from((key, count): (String, u32)) -> Self {
        Self { key, count }
    }
}

/// Aggregate counts over all cataloged projects.
///
/// Entry lists keep the order in which the backend enumerated its maps,
/// which is not stable across backend versions. Use [`sorted_by_count`]
/// when a deterministic order is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub projects_by_language: Vec<StatisticEntry>,
    pub projects_by_ide: Vec<StatisticEntry>,
    pub projects_by_category: Vec<StatisticEntry>,
    pub projects_by_build_system: Vec<StatisticEntry>,
    pub number_of_projects: u32,
    pub number_of_languages: u32,
}

/// Statistic payload as sent by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticDto {
    #[serde(deserialize_with = "de_fields::ordered_counts")]
    pub projects_by_language: Vec<(String, u32)>,
    #[serde(deserialize_with = "de_fields::ordered_counts")]
    pub projects_by_ide: Vec<(String, u32)>,
    #[serde(deserialize_with = "de_fields::ordered_counts")]
    pub projects_by_category: Vec<(String, u32)>,
    #[serde(deserialize_with = "de_fields::ordered_counts")]
    pub projects_by_build_system: Vec<(String, u32)>,
    #[serde(deserialize_with = "de_fields::count")]
    pub number_of_projects: u32,
    #[serde(deserialize_with = "de_fields::count")]
    pub number_of_languages: u32,
}

fn entries(counts: Vec<(String, u32)>) -> Vec<StatisticEntry> {
    counts.into_iter().map(Into::into).collect()
}

impl WireSchema for Statistic {
    const EXPECTED: &'static str = "statistic object";
    type Wire = StatisticDto;

    fn from_wire_shape(wire: StatisticDto, _path: &FieldPath) -> Result<Self, ValidationError> {
        Ok(Self {
            projects_by_language: entries(wire.projects_by_language),
            projects_by_ide: entries(wire.projects_by_ide),
            projects_by_category: entries(wire.projects_by_category),
            projects_by_build_system: entries(wire.projects_by_build_system),
            number_of_projects: wire.number_of_projects,
            number_of_languages: wire.number_of_languages,
        })
    }
}

/// Validate the backend statistic payload and convert its maps to entry lists
pub fn statistics_transform(raw: &Value) -> Result<Statistic, ValidationError> {
    Statistic::from_wire(raw, &FieldPath::root())
}

/// Entries by descending count, ties broken by key
pub fn sorted_by_count(entries: &[StatisticEntry]) -> Vec<StatisticEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    sorted
}
