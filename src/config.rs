//! Provider configuration from environment variables.

/// Where the app fetches post content from.
///
/// Environment variables (read once at startup, native targets only — the
/// web build always talks to its own origin):
/// - `POSTPAGE_PROVIDER_URL`: base URL of the content provider
///   (default: empty, meaning same-origin relative requests)
/// - `POSTPAGE_ACCESS_TOKEN`: bearer token sent with every request, if set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub access_token: Option<String>,
}

impl ProviderConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let base_url = std::env::var("POSTPAGE_PROVIDER_URL").unwrap_or_default();
        let access_token = std::env::var("POSTPAGE_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self {
            base_url,
            access_token,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }
}
