//! HTTP client for the hosted content provider.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::error::ApiError;
use crate::models::Post;

/// JSON client for the content provider's read API.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
            access_token: None,
        }
    }

    /// Build a client from provider configuration.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new()
            .with_base_url(config.base_url.clone())
            .with_access_token(config.access_token.clone())
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token sent with every request
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request and deserialize the JSON response
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);
        let mut rb = self.client.get(&url);

        if let Some(token) = &self.access_token {
            rb = rb.bearer_auth(token);
        }

        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Fetch the currently published post.
    pub async fn current_post(&self) -> Result<Post, ApiError> {
        self.get_json("/api/posts/current").await
    }
}
