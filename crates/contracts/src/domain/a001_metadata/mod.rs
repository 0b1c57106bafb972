//! Project record: UI model, backend DTOs and the transforms between them

pub mod aggregate;
pub mod dto;
pub mod form;
pub mod transform;

pub use aggregate::{Metadata, MetadataId, MetadataPreview};
pub use dto::{MetadataDto, MetadataPreviewDto};
pub use form::{to_backend_form, FormMetadata, MetadataDco};
pub use transform::{
    validate_and_transform, validate_and_transform_list, validate_and_transform_paged,
    validate_and_transform_preview,
};
