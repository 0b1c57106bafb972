//! Page envelope returned by list commands

use serde::{Deserialize, Serialize};

use crate::domain::a001_metadata::MetadataPreview;
use crate::shared::validation::{convert_each, de_fields, FieldPath, ValidationError, WireSchema};

/// One page of a server-side list.
///
/// Envelope numbers are passed through exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub total_pages: u32,
    pub page_size: u32,
    /// 1-based
    pub page_number: u32,
    pub data: Vec<T>,
}

pub type PagedMetadataPreview = Paged<MetadataPreview>;

/// Page envelope as sent by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub struct PagedDto<W> {
    /// The backend names the page count `total_size`
    #[serde(rename = "total_size", deserialize_with = "de_fields::count")]
    pub total_pages: u32,
    #[serde(deserialize_with = "de_fields::count")]
    pub page_size: u32,
    #[serde(deserialize_with = "de_fields::count")]
    pub page_number: u32,
    #[serde(default, deserialize_with = "de_fields::null_as_empty")]
    pub data: Vec<W>,
}

impl<T: WireSchema> WireSchema for Paged<T> {
    const EXPECTED: &'static str = "paged data object";
    type Wire = PagedDto<T::Wire>;

    fn from_wire_shape(wire: Self::Wire, path: &FieldPath) -> Result<Self, ValidationError> {
        Ok(Self {
            total_pages: wire.total_pages,
            page_size: wire.page_size,
            page_number: wire.page_number,
            data: convert_each(wire.data, &path.field("data"), T::from_wire_shape)?,
        })
    }
}
