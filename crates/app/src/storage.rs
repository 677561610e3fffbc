use backend::{SessionStore, StorageBackend};
use dioxus::prelude::*;

/// `window.localStorage`, reached through the renderer's JS bridge.
///
/// Keys and values are JSON-encoded into the script so arbitrary strings
/// stay literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_string(raw: &str) -> Option<String> {
    serde_json::to_string(raw).ok()
}

impl StorageBackend for BrowserStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let key = js_string(key)?;
        let script = format!("return window.localStorage.getItem({key});");
        match document::eval(&script).join::<Option<String>>().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = ?e, "localStorage read failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let (Some(key), Some(value)) = (js_string(key), js_string(value)) else {
            return;
        };
        let script = format!("window.localStorage.setItem({key}, {value}); return true;");
        if let Err(e) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = ?e, "localStorage write failed");
        }
    }

    async fn remove(&self, key: &str) {
        let Some(key) = js_string(key) else {
            return;
        };
        let script = format!("window.localStorage.removeItem({key}); return true;");
        if let Err(e) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = ?e, "localStorage remove failed");
        }
    }
}

pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
