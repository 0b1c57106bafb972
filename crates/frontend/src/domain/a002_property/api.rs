use contracts::{validate_and_transform_list, Category, Language};

use crate::shared::error::CommandError;
use crate::shared::invoke::{call, no_args, rejected, Invoke};

/// Every category known to the backend, in backend order
pub async fn get_all_categories<I: Invoke + ?Sized>(
    backend: &I,
) -> Result<Vec<Category>, CommandError> {
    let raw = call(backend, "get_all_categories", no_args()).await?;
    validate_and_transform_list(&raw).map_err(|e| rejected("get_all_categories", e))
}

/// Every language known to the backend, in backend order
pub async fn get_all_languages<I: Invoke + ?Sized>(
    backend: &I,
) -> Result<Vec<Language>, CommandError> {
    let raw = call(backend, "get_all_languages", no_args()).await?;
    validate_and_transform_list(&raw).map_err(|e| rejected("get_all_languages", e))
}
