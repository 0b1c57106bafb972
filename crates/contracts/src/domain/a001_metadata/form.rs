//! User-editable project data and its backend creation object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{Metadata, MetadataId};
use super::dto::MetadataDto;
use crate::domain::a002_property::{BuildSystem, Category, Ide, Language};
use crate::shared::validation::{FieldPath, ValidationError, ValidationRules};

// ============================================================================
// Form
// ============================================================================

/// Form state of the create/edit project page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetadata {
    pub title: String,
    /// Absent until the user picks a directory
    pub directory: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub build_systems: Vec<BuildSystem>,
    pub preferred_ide: Option<Ide>,
    pub repository_url: Option<String>,
}

impl From<&Metadata> for FormMetadata {
    fn from(metadata: &Metadata) -> Self {
        FormMetadata {
            title: metadata.title.clone(),
            directory: Some(metadata.directory.clone()),
            description: metadata.description.clone(),
            categories: metadata.categories.clone(),
            languages: metadata.languages.clone(),
            build_systems: metadata.build_systems.clone(),
            preferred_ide: metadata.preferred_ide.clone(),
            repository_url: metadata.repository_url.clone(),
        }
    }
}

// ============================================================================
// DCO
// ============================================================================

/// DCO: data creation object accepted by `create_metadata` and `update_metadata`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataDco {
    pub directory: String,
    pub title: String,
    pub description: Option<String>,
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub build_systems: Vec<BuildSystem>,
    /// The backend creation object spells this key with a double `f`
    #[serde(rename = "preffered_ide")]
    pub preferred_ide: Option<Ide>,
    pub repository_url: Option<String>,
}

impl MetadataDco {
    /// Backend-shaped record once the backend has assigned identity
    pub fn into_dto(
        self,
        id: MetadataId,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> MetadataDto {
        MetadataDto {
            id,
            directory: self.directory,
            title: self.title,
            description: self.description,
            categories: self.categories,
            languages: self.languages,
            build_systems: self.build_systems,
            preferred_ide: self.preferred_ide,
            repository_url: self.repository_url,
            created,
            updated,
        }
    }
}

/// Validate a form and re-key it to the backend creation shape.
///
/// Error paths use the UI field names, e.g. `buildSystems[1].name`.
pub fn to_backend_form(form: &FormMetadata) -> Result<MetadataDco, ValidationError> {
    let root = FieldPath::root();
    let required = ValidationRules::required();

    required.validate_string(&form.title, &root.field("title"), "non-empty title")?;

    let directory_path = root.field("directory");
    let directory = form
        .directory
        .as_deref()
        .ok_or_else(|| ValidationError::missing(&directory_path, "project directory"))?;
    required.validate_string(directory, &directory_path, "project directory")?;

    for (index, category) in form.categories.iter().enumerate() {
        category.validate(&root.field("categories").index(index))?;
    }
    for (index, language) in form.languages.iter().enumerate() {
        language.validate(&root.field("languages").index(index))?;
    }
    for (index, build_system) in form.build_systems.iter().enumerate() {
        build_system.validate(&root.field("buildSystems").index(index))?;
    }
    if let Some(ide) = &form.preferred_ide {
        ide.validate(&root.field("preferredIde"))?;
    }

    Ok(MetadataDco {
        directory: directory.to_string(),
        title: form.title.clone(),
        description: form.description.clone(),
        categories: form.categories.clone(),
        languages: form.languages.clone(),
        build_systems: form.build_systems.clone(),
        preferred_ide: form.preferred_ide.clone(),
        repository_url: form.repository_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_metadata::validate_and_transform;
    use crate::shared::validation::ValidationErrorKind;
    use serde_json::json;

    fn form() -> FormMetadata {
        FormMetadata {
            title: "Test Project".into(),
            directory: Some("/home/user/project".into()),
            description: Some("A test project description".into()),
            categories: vec![Category::new("Application"), Category::new("Tool")],
            languages: vec![Language::with_version("Rust", "1.85"), Language::new("Go")],
            build_systems: vec![BuildSystem::new("Cargo")],
            preferred_ide: Some(Ide::new("Neovim")),
            repository_url: Some("https://github.com/test/project".into()),
        }
    }

    #[test]
    fn test_rekeys_to_backend_names() {
        let dco = to_backend_form(&form()).unwrap();
        let wire = serde_json::to_value(&dco).unwrap();

        assert_eq!(wire["directory"], json!("/home/user/project"));
        assert_eq!(wire["build_systems"], json!([{ "name": "Cargo" }]));
        assert_eq!(wire["preffered_ide"], json!({ "name": "Neovim" }));
        assert_eq!(wire["repository_url"], json!("https://github.com/test/project"));
        assert!(wire.get("buildSystems").is_none());
        assert!(wire.get("preferredIde").is_none());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut f = form();
        f.title = "  ".into();
        let err = to_backend_form(&f).unwrap_err();
        assert_eq!(err.path.as_str(), "title");
        assert_eq!(err.kind, ValidationErrorKind::Empty);
    }

    #[test]
    fn test_directory_is_required() {
        let mut f = form();
        f.directory = None;
        let err = to_backend_form(&f).unwrap_err();
        assert_eq!(err.path.as_str(), "directory");
        assert_eq!(err.kind, ValidationErrorKind::Missing);

        f.directory = Some(String::new());
        let err = to_backend_form(&f).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Empty);
    }

    #[test]
    fn test_nested_entities_are_checked() {
        let mut f = form();
        f.build_systems.push(BuildSystem::new(""));
        let err = to_backend_form(&f).unwrap_err();
        assert_eq!(err.path.as_str(), "buildSystems[1].name");

        let mut f = form();
        f.preferred_ide = Some(Ide::new(""));
        let err = to_backend_form(&f).unwrap_err();
        assert_eq!(err.path.as_str(), "preferredIde.name");
    }

    #[test]
    fn test_roundtrip_through_backend_shape() {
        let original = form();
        let id = MetadataId::new_v4();
        let created = Utc::now();

        let dto = to_backend_form(&original)
            .unwrap()
            .into_dto(id, created, created);
        let wire = serde_json::to_value(&dto).unwrap();
        let metadata = validate_and_transform(&wire).unwrap();

        assert_eq!(metadata.id, id);
        assert_eq!(metadata.categories, original.categories);
        assert_eq!(metadata.languages, original.languages);
        assert_eq!(metadata.build_systems, original.build_systems);
        assert_eq!(metadata.preferred_ide, original.preferred_ide);
        assert_eq!(metadata.repository_url, original.repository_url);
        assert_eq!(FormMetadata::from(&metadata), original);
    }

    #[test]
    fn test_roundtrip_keeps_absent_optionals_absent() {
        let original = FormMetadata {
            title: "Bare".into(),
            directory: Some("/bare".into()),
            ..FormMetadata::default()
        };

        let dto = to_backend_form(&original)
            .unwrap()
            .into_dto(MetadataId::new_v4(), Utc::now(), Utc::now());
        let metadata = validate_and_transform(&serde_json::to_value(&dto).unwrap()).unwrap();

        assert_eq!(metadata.description, None);
        assert_eq!(metadata.preferred_ide, None);
        assert_eq!(metadata.repository_url, None);
        assert!(metadata.categories.is_empty());
        assert_eq!(FormMetadata::from(&metadata), original);
    }
}
