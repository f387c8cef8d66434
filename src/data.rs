//! Portfolio payloads and JSON loading
//!
//! This module defines the biography and project records rendered by the UI
//! and loads them from the JSON resources in the data directory. Each
//! resource loads independently; a failed load leaves its section unrendered
//! and never affects the other.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the biography resource inside the data directory
pub const BIO_RESOURCE: &str = "aboutMeData.json";
/// File name of the projects resource inside the data directory
pub const PROJECTS_RESOURCE: &str = "projectsData.json";

/// Backdrop shown for cards that carry no image of their own
pub const DEFAULT_CARD_IMAGE: &str = "images/card_placeholder.webp";
/// Backdrop shown in the spotlight when the project carries none
pub const DEFAULT_SPOTLIGHT_IMAGE: &str = "images/spotlight_placeholder.webp";

/// Biography payload loaded from [`BIO_RESOURCE`]
///
/// Both fields are required for the bio pane to render; a payload missing
/// either (or carrying an empty string) is logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bio {
    #[serde(default, rename = "aboutMe")]
    pub about_me: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}

impl Bio {
    /// Whether the payload carries everything the bio pane needs
    pub fn is_renderable(&self) -> bool {
        matches!(
            (&self.about_me, &self.headshot),
            (Some(about), Some(headshot)) if !about.is_empty() && !headshot.is_empty()
        )
    }
}

/// A single project record from [`PROJECTS_RESOURCE`]
///
/// Records are kept in file order; that order is both the display order and
/// the carousel order. Image and url fields are optional, the rest default
/// to empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub card_image: Option<String>,
    #[serde(default)]
    pub spotlight_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Card backdrop, falling back to the default asset
    pub fn card_image_or_default(&self) -> &str {
        self.card_image.as_deref().unwrap_or(DEFAULT_CARD_IMAGE)
    }

    /// Spotlight backdrop, falling back to the default asset
    pub fn spotlight_image_or_default(&self) -> &str {
        self.spotlight_image
            .as_deref()
            .unwrap_or(DEFAULT_SPOTLIGHT_IMAGE)
    }
}

/// Failure to produce a payload from a resource
///
/// `Read` covers the resource being missing or unreadable, `Parse` covers a
/// readable resource whose body is not the expected JSON. Callers catch the
/// error at the load site, log it, and skip rendering that section.
#[derive(Debug)]
pub enum LoadError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load the biography payload from the data directory
pub async fn load_bio(data_dir: &Path) -> Result<Bio, LoadError> {
    load_resource(data_dir.join(BIO_RESOURCE)).await
}

/// Load the ordered project records from the data directory
pub async fn load_projects(data_dir: &Path) -> Result<Vec<Project>, LoadError> {
    load_resource(data_dir.join(PROJECTS_RESOURCE)).await
}

async fn load_resource<T>(path: PathBuf) -> Result<T, LoadError>
where
    T: serde::de::DeserializeOwned,
{
    let bytes = tokio::fs::read(&path).await.map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("folio-data-{suffix}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn bio_renderable_requires_both_fields() {
        let full: Bio =
            serde_json::from_str(r#"{"aboutMe": "Hi there", "headshot": "images/me.webp"}"#)
                .unwrap();
        assert!(full.is_renderable());

        let missing_headshot: Bio = serde_json::from_str(r#"{"aboutMe": "Hi there"}"#).unwrap();
        assert!(!missing_headshot.is_renderable());

        let missing_about: Bio = serde_json::from_str(r#"{"headshot": "images/me.webp"}"#).unwrap();
        assert!(!missing_about.is_renderable());

        let empty_about: Bio =
            serde_json::from_str(r#"{"aboutMe": "", "headshot": "images/me.webp"}"#).unwrap();
        assert!(!empty_about.is_renderable());
    }

    #[test]
    fn project_parses_schema_field_names() {
        let json = r#"{
            "project_id": "project_alpha",
            "project_name": "Alpha",
            "short_description": "A short blurb",
            "long_description": "The full story of Alpha",
            "card_image": "images/alpha_card.webp",
            "spotlight_image": "images/alpha_spotlight.webp",
            "url": "https://example.com/alpha"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.project_id, "project_alpha");
        assert_eq!(project.project_name, "Alpha");
        assert_eq!(project.card_image_or_default(), "images/alpha_card.webp");
        assert_eq!(
            project.spotlight_image_or_default(),
            "images/alpha_spotlight.webp"
        );
    }

    #[test]
    fn project_falls_back_to_default_images() {
        let project: Project = serde_json::from_str(r#"{"project_name": "Bare"}"#).unwrap();
        assert_eq!(project.card_image_or_default(), DEFAULT_CARD_IMAGE);
        assert_eq!(project.spotlight_image_or_default(), DEFAULT_SPOTLIGHT_IMAGE);
        assert_eq!(project.url, None);
        assert_eq!(project.long_description, "");
    }

    #[tokio::test]
    async fn load_from_missing_directory_is_a_read_error() {
        let dir = unique_temp_dir("missing");
        let err = load_bio(&dir).await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains(BIO_RESOURCE));
    }

    #[tokio::test]
    async fn load_invalid_json_is_a_parse_error() {
        let dir = unique_temp_dir("invalid");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(PROJECTS_RESOURCE), "not json at all").unwrap();

        let err = load_projects(&dir).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_projects_preserves_file_order() {
        let dir = unique_temp_dir("order");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(PROJECTS_RESOURCE),
            r#"[{"project_name": "First"}, {"project_name": "Second"}]"#,
        )
        .unwrap();

        let projects = load_projects(&dir).await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].project_name, "First");
        assert_eq!(projects[1].project_name, "Second");
    }
}
