use serde::{Deserialize, Serialize};

/// Client settings loaded from the `[client]` table of `config.toml`.
///
/// Every field has a default, so a missing or partial file still produces
/// a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_analytics_fallback_url")]
    pub analytics_fallback_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_fallback_timeout")]
    pub fallback_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_analytics_fallback_url() -> String {
    "http://localhost:8000/api/analytics".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_fallback_timeout() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            analytics_fallback_url: default_analytics_fallback_url(),
            request_timeout_secs: default_request_timeout(),
            fallback_timeout_secs: default_fallback_timeout(),
        }
    }
}

impl ClientConfig {
    /// Config pointing every endpoint at a single base URL. Used by tests.
    pub fn for_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_base_url: base.to_string(),
            analytics_fallback_url: format!("{base}/ai/api/analytics"),
            ..Self::default()
        }
    }

    /// Join an API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub client: ClientConfig,
}
