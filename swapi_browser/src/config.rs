//! Runtime configuration for a browsing session

/// Default catalog API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://swapi.dev/api";

/// Default base URL for card and detail images
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://starwars-visualguide.com/assets/img";

/// User agent sent with every catalog request
pub const DEFAULT_USER_AGENT: &str = "swapi_browser/0.1";

/// Endpoints and identity used by a [`crate::Session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Config pointing both the API and the image host at `base_url`.
    /// Handy for tests against a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url: format!("{}/img", base_url.trim_end_matches('/')),
            ..Self::default()
        }
    }

    /// Image URL for an item of `folder` with the given id
    pub fn image_url(&self, folder: &str, id: &str) -> String {
        format!(
            "{}/{}/{}.jpg",
            self.image_base_url.trim_end_matches('/'),
            folder,
            id
        )
    }

    /// Image substituted when an item image cannot be loaded
    pub fn placeholder_url(&self) -> String {
        format!("{}/placeholder.jpg", self.image_base_url.trim_end_matches('/'))
    }
}
