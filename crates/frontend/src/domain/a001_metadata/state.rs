use std::collections::HashMap;

use contracts::{FieldPath, FormMetadata, Metadata, MetadataId, ValidationError};
use leptos::prelude::*;

use super::api;
use crate::shared::error::{settle, CommandError};
use crate::shared::invoke::Invoke;

/// Client-side map of loaded project records.
///
/// Holds no persistence of its own; anything missing is fetched again on
/// demand. Backend results are applied through the `apply_*` methods, which
/// touch only the entry they concern.
#[derive(Clone, Debug, Default)]
pub struct MetadataCache {
    entries: HashMap<MetadataId, Metadata>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MetadataCache {
    pub fn get(&self, id: &MetadataId) -> Option<&Metadata> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn upsert(&mut self, metadata: Metadata) -> Result<(), ValidationError> {
        if !metadata.is_saved() {
            return Err(ValidationError::malformed(
                &FieldPath::root().field("id"),
                "id of a saved record",
                "unsaved records are not cached",
            ));
        }
        self.entries.insert(metadata.id, metadata);
        Ok(())
    }

    pub fn remove(&mut self, id: &MetadataId) -> Option<Metadata> {
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cache the record the backend returned for `id`.
    ///
    /// A record carrying another id is rejected and nothing is stored.
    pub fn apply_record(
        &mut self,
        id: MetadataId,
        result: Result<Metadata, CommandError>,
    ) -> Result<Metadata, CommandError> {
        let result = result.and_then(|metadata| {
            if metadata.id != id {
                return Err(ValidationError::malformed(
                    &FieldPath::root().field("id"),
                    format!("record {}", id),
                    format!("backend returned record {}", metadata.id),
                )
                .into());
            }
            self.upsert(metadata.clone())?;
            Ok(metadata)
        });
        settle(&mut self.error, result)
    }

    /// Finish a `get_with_id` started with `loading` set
    pub fn apply_loaded(
        &mut self,
        id: MetadataId,
        result: Result<Metadata, CommandError>,
    ) -> Result<Metadata, CommandError> {
        self.loading = false;
        self.apply_record(id, result)
    }

    pub fn apply_created(
        &mut self,
        result: Result<MetadataId, CommandError>,
    ) -> Result<MetadataId, CommandError> {
        let id = settle(&mut self.error, result)?;
        log::info!("created project {}", id);
        Ok(id)
    }

    pub fn apply_deleted(
        &mut self,
        id: MetadataId,
        result: Result<(), CommandError>,
    ) -> Result<(), CommandError> {
        settle(&mut self.error, result)?;
        self.entries.remove(&id);
        log::info!("deleted project {}", id);
        Ok(())
    }

    /// Any cached record may have been replaced by a directory import, so
    /// the cache is dropped and rebuilt on demand.
    pub fn apply_directory_import(
        &mut self,
        result: Result<u32, CommandError>,
    ) -> Result<u32, CommandError> {
        let count = settle(&mut self.error, result)?;
        log::info!("imported {} projects", count);
        self.entries.clear();
        Ok(count)
    }

    /// Cached record, or the backend's copy on a miss
    pub async fn fetch<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        id: MetadataId,
    ) -> Result<Metadata, CommandError> {
        if let Some(metadata) = self.entries.get(&id) {
            return Ok(metadata.clone());
        }
        self.refresh(backend, id).await
    }

    /// Always reload from the backend and replace the cached copy
    pub async fn refresh<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        id: MetadataId,
    ) -> Result<Metadata, CommandError> {
        self.loading = true;
        let result = api::get_with_id(backend, id).await;
        self.apply_loaded(id, result)
    }

    /// Create a record from the form and cache what the backend stored.
    ///
    /// The new id is returned even when the follow-up load fails; that
    /// failure is left in `error`.
    pub async fn create<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        form: &FormMetadata,
    ) -> Result<MetadataId, CommandError> {
        let result = api::create_metadata(backend, form).await;
        let id = self.apply_created(result)?;

        if let Err(e) = self.refresh(backend, id).await {
            log::warn!("project {} created but not loaded: {}", id, e);
        }
        Ok(id)
    }

    pub async fn update<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        id: MetadataId,
        form: &FormMetadata,
    ) -> Result<Metadata, CommandError> {
        let result = api::update_metadata(backend, id, form).await;
        self.apply_record(id, result)
    }

    pub async fn delete<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        id: MetadataId,
    ) -> Result<(), CommandError> {
        let metadata = self.fetch(backend, id).await?;
        let result = api::delete_metadata(backend, &metadata).await;
        self.apply_deleted(id, result)
    }

    /// Import one manifest and cache the resulting record
    pub async fn import_file<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        path: &str,
    ) -> Result<Metadata, CommandError> {
        let result = api::load_from_file(backend, path).await;
        let id = settle(&mut self.error, result)?;
        self.refresh(backend, id).await
    }

    pub async fn import_directory<I: Invoke + ?Sized>(
        &mut self,
        backend: &I,
        path: &str,
    ) -> Result<u32, CommandError> {
        let result = api::load_from_directory(backend, path).await;
        self.apply_directory_import(result)
    }
}

pub fn create_state() -> RwSignal<MetadataCache> {
    RwSignal::new(MetadataCache::default())
}
