//! Content provider context for the component tree.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::config::ProviderConfig;

/// Provider context made available to every component.
#[derive(Clone, Copy, Debug)]
pub struct ContentContext {
    pub config: Signal<ProviderConfig>,
}

/// Provider component that sets up the content context
#[component]
pub fn ContentProvider(children: Element) -> Element {
    let config = use_signal(ProviderConfig::from_env);

    use_context_provider(|| ContentContext { config });

    children
}

impl ContentContext {
    /// Create an API client configured for the current provider
    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(&self.config.read())
    }
}
