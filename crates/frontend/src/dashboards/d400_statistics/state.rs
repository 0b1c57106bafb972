use contracts::{sorted_by_count, Statistic, StatisticEntry};
use leptos::prelude::*;

use super::api;
use crate::shared::error::{settle, CommandError};
use crate::shared::invoke::Invoke;

#[derive(Clone, Debug, Default)]
pub struct StatisticsState {
    pub statistic: Option<Statistic>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatisticsState {
    /// Keep the previous statistic when `result` is a failure
    pub fn apply(&mut self, result: Result<Statistic, CommandError>) -> Result<(), CommandError> {
        let result = settle(&mut self.error, result);
        self.loading = false;

        self.statistic = Some(result?);
        Ok(())
    }

    pub async fn load<I: Invoke + ?Sized>(&mut self, backend: &I) -> Result<(), CommandError> {
        self.loading = true;
        let result = api::get_statistics(backend).await;
        self.apply(result)
    }

    /// Languages with the most projects first
    pub fn top_languages(&self) -> Vec<StatisticEntry> {
        self.statistic
            .as_ref()
            .map(|s| sorted_by_count(&s.projects_by_language))
            .unwrap_or_default()
    }
}

pub fn create_state() -> RwSignal<StatisticsState> {
    RwSignal::new(StatisticsState::default())
}
