use contracts::{statistics_transform, Statistic};

use crate::shared::error::CommandError;
use crate::shared::invoke::{call, no_args, rejected, Invoke};

/// Aggregate counts over the whole catalog
pub async fn get_statistics<I: Invoke + ?Sized>(backend: &I) -> Result<Statistic, CommandError> {
    let raw = call(backend, "get_statistics", no_args()).await?;
    statistics_transform(&raw).map_err(|e| rejected("get_statistics", e))
}
