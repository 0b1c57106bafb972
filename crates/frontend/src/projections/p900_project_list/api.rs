use contracts::{sanitize_filter, validate_and_transform_paged, Filter, PagedMetadataPreview};
use serde_json::json;

use crate::shared::error::CommandError;
use crate::shared::invoke::{call, rejected, Invoke};

/// One page of project previews matching `filter`.
///
/// Empty filter fields are dropped here and nowhere else.
pub async fn get_all<I: Invoke + ?Sized>(
    backend: &I,
    page_number: u32,
    filter: &Filter,
) -> Result<PagedMetadataPreview, CommandError> {
    let args = json!({
        "pageNumber": page_number,
        "filter": sanitize_filter(filter),
    });
    let raw = call(backend, "get_all", args).await?;
    validate_and_transform_paged(&raw).map_err(|e| rejected("get_all", e))
}
