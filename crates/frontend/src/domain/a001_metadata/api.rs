//! Typed commands over single project records

use contracts::{
    to_backend_form, validate_and_transform, FieldPath, FormMetadata, Metadata, MetadataDto,
    MetadataId, ValidationError, WireSchema,
};
use serde_json::json;

use crate::shared::error::CommandError;
use crate::shared::invoke::{call, expect_null, no_args, rejected, Invoke};

/// Commands that address a stored record refuse the unsaved sentinel
fn saved_id(id: MetadataId) -> Result<MetadataId, ValidationError> {
    if id.is_unsaved() {
        Err(ValidationError::malformed(
            &FieldPath::root().field("id"),
            "id of a saved record",
            "the record has not been saved yet",
        ))
    } else {
        Ok(id)
    }
}

fn returned_id(command: &str, value: &serde_json::Value) -> Result<MetadataId, CommandError> {
    MetadataId::from_wire(value, &FieldPath::root()).map_err(|e| rejected(command, e))
}

pub async fn get_with_id<I: Invoke + ?Sized>(
    backend: &I,
    id: MetadataId,
) -> Result<Metadata, CommandError> {
    let raw = call(backend, "get_with_id", json!({ "id": id })).await?;
    validate_and_transform(&raw).map_err(|e| rejected("get_with_id", e))
}

/// Returns the id the backend assigned to the new record
pub async fn create_metadata<I: Invoke + ?Sized>(
    backend: &I,
    form: &FormMetadata,
) -> Result<MetadataId, CommandError> {
    let created = to_backend_form(form)?;
    let raw = call(backend, "create_metadata", json!({ "created": created })).await?;
    returned_id("create_metadata", &raw)
}

pub async fn update_metadata<I: Invoke + ?Sized>(
    backend: &I,
    id: MetadataId,
    form: &FormMetadata,
) -> Result<Metadata, CommandError> {
    let id = saved_id(id)?;
    let updated = to_backend_form(form)?;
    let raw = call(
        backend,
        "update_metadata",
        json!({ "id": id, "updated": updated }),
    )
    .await?;
    validate_and_transform(&raw).map_err(|e| rejected("update_metadata", e))
}

pub async fn delete_metadata<I: Invoke + ?Sized>(
    backend: &I,
    metadata: &Metadata,
) -> Result<(), CommandError> {
    saved_id(metadata.id)?;
    let raw = call(
        backend,
        "delete_metadata",
        json!({ "metadata": MetadataDto::from(metadata) }),
    )
    .await?;
    expect_null(&raw).map_err(|e| rejected("delete_metadata", e))
}

/// Import a single project manifest; returns the id of the imported record
pub async fn load_from_file<I: Invoke + ?Sized>(
    backend: &I,
    path: &str,
) -> Result<MetadataId, CommandError> {
    let raw = call(backend, "load_from_file", json!({ "path": path })).await?;
    returned_id("load_from_file", &raw)
}

/// Import every manifest below a directory; returns how many were loaded
pub async fn load_from_directory<I: Invoke + ?Sized>(
    backend: &I,
    path: &str,
) -> Result<u32, CommandError> {
    let raw = call(backend, "load_from_directory", json!({ "path": path })).await?;
    u32::from_wire(&raw, &FieldPath::root()).map_err(|e| rejected("load_from_directory", e))
}

pub async fn init_cache<I: Invoke + ?Sized>(backend: &I) -> Result<(), CommandError> {
    let raw = call(backend, "init_cache", no_args()).await?;
    expect_null(&raw).map_err(|e| rejected("init_cache", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{metadata_wire, ScriptedBackend, ID_A};
    use contracts::{BuildSystem, Ide};
    use serde_json::Value;

    fn form() -> FormMetadata {
        FormMetadata {
            title: "Catalog".into(),
            directory: Some("/projects/catalog".into()),
            build_systems: vec![BuildSystem::new("Cargo")],
            preferred_ide: Some(Ide::new("Helix")),
            ..FormMetadata::default()
        }
    }

    fn id_a() -> MetadataId {
        MetadataId(ID_A.parse().unwrap())
    }

    #[tokio::test]
    async fn test_get_with_id_sends_id_and_validates() {
        let backend = ScriptedBackend::new();
        backend.reply("get_with_id", metadata_wire(ID_A, "Catalog"));

        let metadata = get_with_id(&backend, id_a()).await.unwrap();
        assert_eq!(metadata.id, id_a());
        assert_eq!(metadata.title, "Catalog");

        let calls = backend.calls();
        assert_eq!(calls[0].1, json!({ "id": ID_A }));
    }

    #[tokio::test]
    async fn test_get_with_id_rejects_malformed_payload() {
        let backend = ScriptedBackend::new();
        let mut raw = metadata_wire(ID_A, "Catalog");
        raw["categories"] = json!([{ "name": 7 }]);
        backend.reply("get_with_id", raw);

        let err = get_with_id(&backend, id_a()).await.unwrap_err();
        match err {
            CommandError::Validation(e) => assert_eq!(e.path.as_str(), "categories[0].name"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_sends_backend_keys() {
        let backend = ScriptedBackend::new();
        backend.reply("create_metadata", json!(ID_A));

        let id = create_metadata(&backend, &form()).await.unwrap();
        assert_eq!(id, id_a());

        let (_, args) = &backend.calls()[0];
        assert_eq!(args["created"]["build_systems"], json!([{ "name": "Cargo" }]));
        assert_eq!(args["created"]["preffered_ide"], json!({ "name": "Helix" }));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let backend = ScriptedBackend::new();
        let mut f = form();
        f.title = String::new();

        let err = create_metadata(&backend, &f).await.unwrap_err();
        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_reject_unsaved_id() {
        let backend = ScriptedBackend::new();

        let err = update_metadata(&backend, MetadataId::UNSAVED, &form())
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let mut metadata = validate_and_transform(&metadata_wire(ID_A, "Catalog")).unwrap();
        metadata.id = MetadataId::UNSAVED;
        let err = delete_metadata(&backend, &metadata).await.unwrap_err();
        assert!(err.is_validation());

        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_sends_full_record() {
        let backend = ScriptedBackend::new();
        backend.reply("delete_metadata", Value::Null);
        let metadata = validate_and_transform(&metadata_wire(ID_A, "Catalog")).unwrap();

        delete_metadata(&backend, &metadata).await.unwrap();

        let (_, args) = &backend.calls()[0];
        assert_eq!(args["metadata"]["id"], json!(ID_A));
        assert_eq!(args["metadata"]["build_systems"], json!([{ "name": "Cargo" }]));
        assert_eq!(args["metadata"]["created"], json!("2023-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_void_commands_require_null() {
        let backend = ScriptedBackend::new();
        backend.reply("init_cache", Value::Null);
        backend.reply("init_cache", json!("done"));

        assert!(init_cache(&backend).await.is_ok());
        assert!(init_cache(&backend).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_imports() {
        let backend = ScriptedBackend::new();
        backend.reply("load_from_file", json!(ID_A));
        backend.reply("load_from_directory", json!(12));
        backend.reply("load_from_directory", json!(-1));

        assert_eq!(load_from_file(&backend, "/p/manifest.toml").await.unwrap(), id_a());
        assert_eq!(load_from_directory(&backend, "/p").await.unwrap(), 12);
        assert!(load_from_directory(&backend, "/p").await.unwrap_err().is_validation());

        let (_, args) = &backend.calls()[0];
        assert_eq!(args, &json!({ "path": "/p/manifest.toml" }));
    }
}
