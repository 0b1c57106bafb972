use contracts::{Filter, MetadataId, MetadataPreview, PagedMetadataPreview};
use leptos::prelude::*;

use super::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::error::{settle, CommandError};
use crate::shared::invoke::Invoke;

/// One row of the all-projects table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: MetadataId,
    pub title: String,
    pub language_name: String,
    pub updated: String,
}

impl From<&MetadataPreview> for ProjectRow {
    fn from(preview: &MetadataPreview) -> Self {
        let language_name = preview
            .languages
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: preview.id,
            title: preview.title.clone(),
            language_name,
            updated: format_datetime(&preview.updated),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageState {
    /// 1-based
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub loaded_previews: Vec<MetadataPreview>,
    pub filter: Filter,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: 1,
            loaded_previews: Vec::new(),
            filter: Filter::default(),
            loading: false,
            error: None,
        }
    }
}

impl PageState {
    /// Store a page that was requested under `filter`.
    ///
    /// A page requested under a filter that has since been replaced is
    /// dropped; the load for the current filter is still on its way.
    pub fn apply_page(
        &mut self,
        filter: &Filter,
        result: Result<PagedMetadataPreview, CommandError>,
    ) -> Result<(), CommandError> {
        if *filter != self.filter {
            log::debug!("dropped page loaded under a replaced filter");
            return Ok(());
        }

        let result = settle(&mut self.error, result);
        self.loading = false;

        let page = result?;
        log::debug!(
            "loaded page {}/{} ({} previews)",
            page.page_number,
            page.total_pages,
            page.data.len()
        );
        self.current_page = page.page_number;
        self.total_pages = page.total_pages;
        self.page_size = page.page_size;
        self.loaded_previews = page.data;
        Ok(())
    }

    /// Replace the loaded previews with page `page_number` under the current filter
    pub async fn load_page<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        page_number: u32,
    ) -> Result<(), CommandError> {
        self.loading = true;
        let filter = self.filter.clone();
        let result = api::get_all(backend, page_number.max(1), &filter).await;
        self.apply_page(&filter, result)
    }

    pub async fn preload_first_page<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
    ) -> Result<(), CommandError> {
        self.load_page(backend, 1).await
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Load the following page; `Ok(false)` when already on the last one
    pub async fn next_page<I: Invoke + ?Sized>(&mut self, backend: &I) -> Result<bool, CommandError> {
        if !self.has_next() {
            return Ok(false);
        }
        self.load_page(backend, self.current_page + 1).await?;
        Ok(true)
    }

    /// Load the preceding page; `Ok(false)` when already on the first one
    pub async fn previous_page<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
    ) -> Result<bool, CommandError> {
        if !self.has_previous() {
            return Ok(false);
        }
        self.load_page(backend, self.current_page - 1).await?;
        Ok(true)
    }

    /// Apply a new filter and reload from the first page.
    ///
    /// The filter is kept even when the reload fails, so a retry uses it.
    pub async fn set_filter<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        filter: Filter,
    ) -> Result<(), CommandError> {
        self.filter = filter;
        self.load_page(backend, 1).await
    }

    pub fn reset(&mut self) {
        self.loaded_previews.clear();
        self.current_page = 1;
    }

    pub fn rows(&self) -> Vec<ProjectRow> {
        self.loaded_previews.iter().map(ProjectRow::from).collect()
    }
}

pub fn create_state() -> RwSignal<PageState> {
    RwSignal::new(PageState::default())
}
