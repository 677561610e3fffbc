use shared_types::{AppError, LoginResponse, Session, User, TOKEN_KEY, USER_KEY};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// A string key-value slot store, such as the browser's local storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = ()>;
    fn remove(&self, key: &str) -> impl Future<Output = ()>;
}

/// In-process storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a slot, read synchronously.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.peek(key)
    }

    async fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

/// Persists the signed-in session under the `token` and `user` slots.
#[derive(Debug, Clone)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Restore the stored session.
    ///
    /// Both slots must be present. A `user` slot that no longer parses is
    /// cleared and treated as signed out.
    pub async fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY).await.filter(|t| !t.is_empty());
        let raw_user = self.backend.get(USER_KEY).await;
        let (token, raw_user) = (token?, raw_user?);
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "Session restored");
                Some(Session { token, user })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored user is unreadable, clearing session");
                self.clear().await;
                None
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<(), AppError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| AppError::internal(format!("Failed to store session: {e}")))?;
        self.backend.set(TOKEN_KEY, &session.token).await;
        self.backend.set(USER_KEY, &user).await;
        Ok(())
    }

    pub async fn clear(&self) {
        self.backend.remove(TOKEN_KEY).await;
        self.backend.remove(USER_KEY).await;
        tracing::info!("Session cleared");
    }

    /// Persist a login response as the current session.
    ///
    /// Storage is left untouched unless the response carries both a user
    /// and a token.
    pub async fn establish(&self, response: LoginResponse) -> Result<Session, AppError> {
        let session = response.into_session()?;
        self.save(&session).await?;
        tracing::info!(username = %session.user.username, "Session established");
        Ok(session)
    }
}
