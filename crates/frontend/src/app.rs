//! Application state wiring
//!
//! Every store lives in its own `RwSignal` handed out through context.
//! Async tasks read their inputs from a store without holding it, await the
//! backend, then apply only their own result to the store as it is at that
//! moment. Tasks running at the same time never overwrite each other's
//! entries.

use contracts::{Filter, FormMetadata, Metadata, MetadataId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_statistics::api as statistics_api;
use crate::dashboards::d400_statistics::state::{self as statistics, StatisticsState};
use crate::domain::a001_metadata::api::{self as metadata_api, init_cache};
use crate::domain::a001_metadata::state::{self as metadata, MetadataCache};
use crate::domain::a002_property::state::{self as property, fetch_options, FilterOptions};
use crate::projections::p900_project_list::api as project_list_api;
use crate::projections::p900_project_list::state::{self as project_list, PageState};
use crate::shared::config::ClientConfig;
use crate::shared::invoke::Invoke;

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: RwSignal<PageState>,
    pub cache: RwSignal<MetadataCache>,
    pub statistics: RwSignal<StatisticsState>,
    pub filter_options: RwSignal<FilterOptions>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: project_list::create_state(),
            cache: metadata::create_state(),
            statistics: statistics::create_state(),
            filter_options: property::create_state(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Put the stores and the backend handle into the current reactive owner
pub fn provide_app_state<I>(backend: I) -> AppState
where
    I: Invoke + Clone + Send + Sync + 'static,
{
    let state = AppState::new();
    provide_context(state);
    provide_context(backend);
    state
}

/// Hook to access all stores
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppStateProvider not found in component tree")
}

pub fn use_page_state() -> RwSignal<PageState> {
    use_app_state().page
}

pub fn use_metadata_cache() -> RwSignal<MetadataCache> {
    use_app_state().cache
}

pub fn use_statistics() -> RwSignal<StatisticsState> {
    use_app_state().statistics
}

pub fn use_filter_options() -> RwSignal<FilterOptions> {
    use_app_state().filter_options
}

/// Hook to access the backend handle
pub fn use_commands<I>() -> I
where
    I: Invoke + Clone + Send + Sync + 'static,
{
    use_context::<I>().expect("AppStateProvider not found in component tree")
}

// ============================================================================
// Tasks
// ============================================================================

// Failures below are recorded in the store's `error` field and logged by
// the command layer.

pub async fn load_page<I: Invoke>(backend: I, state: RwSignal<PageState>, page: u32) {
    let filter = state.with_untracked(|s| s.filter.clone());
    state.update(|s| s.loading = true);
    let result = project_list_api::get_all(&backend, page.max(1), &filter).await;
    state.update(|s| {
        let _ = s.apply_page(&filter, result);
    });
}

/// Move one page forward or back; nothing happens at either end
pub async fn step_page<I: Invoke>(backend: I, state: RwSignal<PageState>, forward: bool) {
    let target = state.with_untracked(|s| match forward {
        true if s.has_next() => Some(s.current_page + 1),
        false if s.has_previous() => Some(s.current_page - 1),
        _ => None,
    });
    if let Some(page) = target {
        load_page(backend, state, page).await;
    }
}

pub async fn apply_filter<I: Invoke>(backend: I, state: RwSignal<PageState>, filter: Filter) {
    state.update(|s| s.filter = filter);
    load_page(backend, state, 1).await;
}

pub async fn load_statistics<I: Invoke>(backend: I, state: RwSignal<StatisticsState>) {
    state.update(|s| s.loading = true);
    let result = statistics_api::get_statistics(&backend).await;
    state.update(|s| {
        let _ = s.apply(result);
    });
}

pub async fn load_filter_options<I: Invoke>(backend: I, state: RwSignal<FilterOptions>) {
    state.update(|s| s.loading = true);
    let result = fetch_options(&backend).await;
    state.update(|s| {
        let _ = s.apply(result);
    });
}

async fn cached_or_loaded<I: Invoke>(
    backend: &I,
    cache: RwSignal<MetadataCache>,
    id: MetadataId,
) -> Option<Metadata> {
    if let Some(metadata) = cache.with_untracked(|c| c.get(&id).cloned()) {
        return Some(metadata);
    }
    cache.update(|c| c.loading = true);
    let result = metadata_api::get_with_id(backend, id).await;
    cache
        .try_update(|c| c.apply_loaded(id, result).ok())
        .flatten()
}

pub async fn fetch_record<I: Invoke>(backend: I, cache: RwSignal<MetadataCache>, id: MetadataId) {
    cached_or_loaded(&backend, cache, id).await;
}

/// Save the form as a new record (`id` is `None`) or over an existing one
pub async fn save_record<I: Invoke>(
    backend: I,
    cache: RwSignal<MetadataCache>,
    id: Option<MetadataId>,
    form: FormMetadata,
) {
    match id {
        Some(id) => {
            let result = metadata_api::update_metadata(&backend, id, &form).await;
            cache.update(|c| {
                let _ = c.apply_record(id, result);
            });
        }
        None => {
            let result = metadata_api::create_metadata(&backend, &form).await;
            let created = cache.try_update(|c| c.apply_created(result).ok()).flatten();
            if let Some(id) = created {
                cache.update(|c| c.loading = true);
                let result = metadata_api::get_with_id(&backend, id).await;
                cache.update(|c| {
                    if let Err(e) = c.apply_loaded(id, result) {
                        log::warn!("project {} created but not loaded: {}", id, e);
                    }
                });
            }
        }
    }
}

pub async fn delete_record<I: Invoke>(backend: I, cache: RwSignal<MetadataCache>, id: MetadataId) {
    let Some(metadata) = cached_or_loaded(&backend, cache, id).await else {
        return;
    };
    let result = metadata_api::delete_metadata(&backend, &metadata).await;
    cache.update(|c| {
        let _ = c.apply_deleted(id, result);
    });
}

pub fn spawn_load_page<I: Invoke + 'static>(backend: I, state: RwSignal<PageState>, page: u32) {
    spawn_local(load_page(backend, state, page));
}

pub fn spawn_next_page<I: Invoke + 'static>(backend: I, state: RwSignal<PageState>) {
    spawn_local(step_page(backend, state, true));
}

pub fn spawn_previous_page<I: Invoke + 'static>(backend: I, state: RwSignal<PageState>) {
    spawn_local(step_page(backend, state, false));
}

pub fn spawn_set_filter<I: Invoke + 'static>(
    backend: I,
    state: RwSignal<PageState>,
    filter: Filter,
) {
    spawn_local(apply_filter(backend, state, filter));
}

pub fn spawn_statistics<I: Invoke + 'static>(backend: I, state: RwSignal<StatisticsState>) {
    spawn_local(load_statistics(backend, state));
}

pub fn spawn_filter_options<I: Invoke + 'static>(backend: I, state: RwSignal<FilterOptions>) {
    spawn_local(load_filter_options(backend, state));
}

pub fn spawn_fetch<I: Invoke + 'static>(backend: I, state: RwSignal<MetadataCache>, id: MetadataId) {
    spawn_local(fetch_record(backend, state, id));
}

pub fn spawn_save<I: Invoke + 'static>(
    backend: I,
    state: RwSignal<MetadataCache>,
    id: Option<MetadataId>,
    form: FormMetadata,
) {
    spawn_local(save_record(backend, state, id, form));
}

pub fn spawn_delete<I: Invoke + 'static>(backend: I, state: RwSignal<MetadataCache>, id: MetadataId) {
    spawn_local(delete_record(backend, state, id));
}

/// Warm the backend cache if configured, then load the first page and the
/// filter choices
pub fn start_session<I>(backend: I, app: AppState, config: &ClientConfig)
where
    I: Invoke + Clone + 'static,
{
    let init = config.init_cache_on_start;
    app.page.update(|s| s.loading = true);

    spawn_local(async move {
        if init {
            if let Err(e) = init_cache(&backend).await {
                log::warn!("backend cache not initialized: {}", e);
            }
        }

        load_page(backend.clone(), app.page, 1).await;
        spawn_filter_options(backend, app.filter_options);
    });
}

/// Provides the stores to its children and starts the session
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppStateProvider(
    #[prop(optional)] config: Option<ClientConfig>,
    children: Children,
) -> impl IntoView {
    use crate::shared::invoke::TauriInvoke;

    let config = config.unwrap_or_else(ClientConfig::embedded);
    let app = provide_app_state(TauriInvoke);
    start_session(TauriInvoke, app, &config);

    children()
}
