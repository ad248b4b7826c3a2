/// Base URL used when `STORY_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://story-api.dicoding.dev/v1";

/// `localStorage` key the login page stores the bearer token under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Build-time base URL plus the token currently in `localStorage`.
    pub fn load() -> Self {
        let base_url = option_env!("STORY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(base_url, read_access_token())
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn read_access_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(ACCESS_TOKEN_KEY).ok()?
}
