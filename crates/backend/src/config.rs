use shared_types::{ClientConfig, ConfigFile};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
static DEFAULT: OnceLock<ClientConfig> = OnceLock::new();

/// Parse the `[client]` table of a `config.toml` document.
///
/// An unparseable document logs a warning and yields the defaults.
pub fn parse(contents: &str) -> ClientConfig {
    match toml::from_str::<ConfigFile>(contents) {
        Ok(file) => file.client,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse config.toml, using default client config");
            ClientConfig::default()
        }
    }
}

/// Parse and store the client config. Only the first call has effect.
pub fn init(contents: &str) -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = parse(contents);
        tracing::info!(api_base_url = %config.api_base_url, "Client config loaded");
        config
    })
}

/// The loaded config, or the defaults if [`init`] has not run.
pub fn config() -> &'static ClientConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(ClientConfig::default))
}
