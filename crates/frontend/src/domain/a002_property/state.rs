use contracts::{Category, Language};
use leptos::prelude::*;

use super::api;
use crate::shared::error::{settle, CommandError};
use crate::shared::invoke::Invoke;

/// Choices offered by the list filter pickers
#[derive(Clone, Debug, Default)]
pub struct FilterOptions {
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Both picker lists, or the first failure
pub async fn fetch_options<I: Invoke + ?Sized>(
    backend: &I,
) -> Result<(Vec<Category>, Vec<Language>), CommandError> {
    let categories = api::get_all_categories(backend).await?;
    let languages = api::get_all_languages(backend).await?;
    Ok((categories, languages))
}

impl FilterOptions {
    /// Nothing is replaced unless both lists loaded
    pub fn apply(
        &mut self,
        result: Result<(Vec<Category>, Vec<Language>), CommandError>,
    ) -> Result<(), CommandError> {
        let result = settle(&mut self.error, result);
        self.loading = false;

        let (categories, languages) = result?;
        self.categories = categories;
        self.languages = languages;
        Ok(())
    }

    pub async fn load<I: Invoke + ?Sized>(&mut self, backend: &I) -> Result<(), CommandError> {
        self.loading = true;
        let result = fetch_options(backend).await;
        self.apply(result)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn language_names(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.name.clone()).collect()
    }
}

pub fn create_state() -> RwSignal<FilterOptions> {
    RwSignal::new(FilterOptions::default())
}
