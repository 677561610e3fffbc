use backend::ApiClient;
use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod storage;
use auth::{use_auth, AuthState};
use routes::Route;
use storage::session_store;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// The REST client provided at the app root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn App() -> Element {
    // Loaded after launch so parse warnings reach the installed subscriber.
    let config = use_hook(|| {
        let config = backend::config::init(CONFIG_TOML);
        tracing::info!(api = %config.api_base_url, platform = client_platform(), "Starting client");
        config
    });
    use_context_provider(AuthState::new);
    use_context_provider(|| ApiClient::new(config.clone()));

    // Read the stored session once; routing waits on `restored`.
    let mut auth = use_auth();
    use_future(move || async move {
        let session = session_store().load().await;
        auth.finish_restore(session.map(|s| s.user));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ClientConfig;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(backend::config::parse(CONFIG_TOML), ClientConfig::default());
    }
}
