use serde::{Deserialize, Serialize};

/// A project as served by the api.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(alias = "type")]
    pub project_type: Option<String>,

    /// Comma separated, e.g. `"rust, yew, wasm"`.

    pub technologies_used: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// One entry of a project's image list.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProjectImage {
    pub image_url: String,
    pub alt_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

impl ImagesResponse {

    /// Only the first image is ever shown for a project.

    pub fn first_image(self) -> Option<ProjectImage> {
        self.images.into_iter().next()
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteSettings {
    pub site_title: Option<String>,
}

/// The query string carried to the error page, e.g.
/// `/error?error_code=503&error_message=...`.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ErrorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ErrorQuery {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        ErrorQuery {
            error_code: Some(code.to_string()),
            error_message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_optional_fields_default() {
        let project: Project = serde_json::from_str(
            r#"{"id": 7, "title": "Atlas", "description": "maps"}"#
        ).unwrap();

        assert_eq!(project.id, 7);
        assert!(!project.featured);
        assert_eq!(project.project_type, None);
        assert_eq!(project.technologies_used, None);
        assert_eq!(project.status, None);
    }

    #[test]
    fn project_type_accepts_wire_alias() {
        let project: Project = serde_json::from_str(
            r#"{"id": 1, "title": "t", "description": "d", "featured": true, "type": "web", "status": "Live"}"#
        ).unwrap();

        assert!(project.featured);
        assert_eq!(project.project_type.as_deref(), Some("web"));
        assert_eq!(project.status.as_deref(), Some("Live"));
    }

    #[test]
    fn first_image_takes_head_of_list() {
        let response: ImagesResponse = serde_json::from_str(r#"{"images": [
            {"image_url": "/img/a.png", "alt_text": "first"},
            {"image_url": "/img/b.png"}
        ]}"#).unwrap();

        let image = response.first_image().unwrap();
        assert_eq!(image.image_url, "/img/a.png");
        assert_eq!(image.alt_text.as_deref(), Some("first"));
    }

    #[test]
    fn empty_image_list_has_no_image() {
        let response: ImagesResponse = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert_eq!(response.first_image(), None);

        let response: ImagesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_image(), None);
    }
}
