//! Transfer contract between the catalog backend and the UI
//!
//! Backend payloads arrive as untyped JSON in snake_case. Everything in this
//! crate validates them field by field and converts them to camelCase UI
//! models, or converts UI form data back to the backend shape. Failures are
//! always total: either the whole value is produced or a
//! [`ValidationError`] names the offending field.

pub mod dashboards;
pub mod domain;
pub mod shared;

pub use dashboards::d400_statistics::{sorted_by_count, statistics_transform, Statistic, StatisticEntry};
pub use domain::a001_metadata::{
    to_backend_form, validate_and_transform, validate_and_transform_list,
    validate_and_transform_paged, validate_and_transform_preview, FormMetadata, Metadata,
    MetadataDco, MetadataDto, MetadataId, MetadataPreview,
};
pub use domain::a002_property::{BuildSystem, Category, Ide, Language};
pub use shared::filter::{sanitize_filter, Filter};
pub use shared::paging::{Paged, PagedMetadataPreview};
pub use shared::validation::{FieldPath, ValidationError, ValidationErrorKind, WireSchema};
