/// The api base used when none is configured.

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Builds the uris of every api endpoint the app talks to.

#[derive(Clone, PartialEq, Debug)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(None)
    }
}

impl ApiConfig {

    /// Blank bases fall back to [`DEFAULT_API_BASE`]. A trailing slash is
    /// dropped so paths can always be appended with a leading one.

    pub fn new(base: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/');

        ApiConfig { base: base.to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn projects_uri(&self) -> String {
        format!("{}/api/projects", self.base)
    }

    pub fn project_uri(&self, project_id: i32) -> String {
        format!("{}/api/projects/{}", self.base, project_id)
    }

    pub fn project_images_uri(&self, project_id: i32) -> String {
        format!("{}/api/projects/{}/images?limit=1", self.base, project_id)
    }

    pub fn site_settings_uri(&self) -> String {
        format!("{}/api/site-settings", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_base_uses_localhost() {
        assert_eq!(ApiConfig::new(None).base(), "http://localhost:3000");
        assert_eq!(ApiConfig::new(Some("   ")).base(), "http://localhost:3000");
        assert_eq!(ApiConfig::default(), ApiConfig::new(None));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let api = ApiConfig::new(Some("https://api.example.org/"));
        assert_eq!(api.base(), "https://api.example.org");
        assert_eq!(api.projects_uri(), "https://api.example.org/api/projects");
    }

    #[test]
    fn image_uri_asks_for_one_image() {
        let api = ApiConfig::new(None);
        assert_eq!(api.project_images_uri(12), "http://localhost:3000/api/projects/12/images?limit=1");
        assert_eq!(api.project_uri(12), "http://localhost:3000/api/projects/12");
        assert_eq!(api.site_settings_uri(), "http://localhost:3000/api/site-settings");
    }
}
