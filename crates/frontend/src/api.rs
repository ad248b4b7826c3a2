use serde::Deserialize;
use storyapp_shared::models::{deserialize_story_list, lenient_text, Story};
use thiserror::Error;

use crate::config::ApiConfig;
use crate::presenter::StoryModel;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("missing access token, please log in first")]
    Unauthenticated,
    #[error("request failed: {0}")]
    Network(String),
    /// The API answered with `error: true`; the message is the API's own.
    #[error("{0}")]
    Server(String),
    #[error("unexpected response (HTTP {status}): {reason}")]
    Decode { status: u16, reason: String },
}

/// Query parameters for `GET /stories`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoriesQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Only return stories posted with a location.
    pub location: bool,
}

impl StoriesQuery {
    pub fn with_location() -> Self {
        Self {
            location: true,
            ..Self::default()
        }
    }
}

/// Build the stories URL from a normalized base URL and query.
pub fn build_stories_url(base_url: &str, query: &StoriesQuery) -> String {
    let mut params = Vec::new();
    if let Some(page) = query.page {
        params.push(format!("page={}", page));
    }
    if let Some(size) = query.size {
        params.push(format!("size={}", size));
    }
    if query.location {
        params.push("location=1".to_string());
    }

    if params.is_empty() {
        format!("{}/stories", base_url)
    } else {
        format!("{}/stories?{}", base_url, params.join("&"))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    /// A missing, null or non-array list decodes as no stories.
    #[serde(default, deserialize_with = "deserialize_story_list")]
    pub list_story: Vec<Story>,
}

/// Interpret a stories response body.
///
/// The API reports failures in the body (`error: true`) as well as through the
/// status code, so the body wins whenever it parses.
pub fn decode_stories_response(status: u16, body: &str) -> Result<StoriesResponse, ApiError> {
    let resp: StoriesResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode {
            status,
            reason: e.to_string(),
        })?;

    if resp.error {
        return Err(ApiError::Server(resp.message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Server(if resp.message.is_empty() {
            format!("HTTP {}", status)
        } else {
            resp.message
        }));
    }
    Ok(resp)
}

pub async fn fetch_stories(
    config: &ApiConfig,
    query: &StoriesQuery,
) -> Result<StoriesResponse, ApiError> {
    let token = config
        .access_token
        .as_deref()
        .ok_or(ApiError::Unauthenticated)?;
    let url = build_stories_url(&config.base_url, query);
    tracing::debug!(%url, "fetching stories");

    let resp = reqwest::Client::new()
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_stories_response(status, &body)
}

/// The story API as seen by the home presenter.
#[derive(Debug, Clone)]
pub struct StoryApi {
    config: ApiConfig,
}

impl StoryApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl StoryModel for StoryApi {
    async fn get_all_reports(&self) -> Result<StoriesResponse, ApiError> {
        fetch_stories(&self.config, &StoriesQuery::with_location()).await
    }
}
