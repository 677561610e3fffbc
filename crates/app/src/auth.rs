use dioxus::prelude::*;
use shared_types::{Role, User};

use crate::routes::Route;
use crate::storage::session_store;

/// Global authentication state.
///
/// `restored` flips to true once the stored session has been read; no
/// routing decision is made before that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<User>>,
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    pub fn user(&self) -> Option<User> {
        self.current_user.read().clone()
    }

    pub fn set_user(&mut self, user: User) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Record the outcome of reading the stored session.
    pub fn finish_restore(&mut self, user: Option<User>) {
        self.current_user.set(user);
        self.restored.set(true);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Returns a handler that clears the stored session and context, then
/// returns to `/login`.
pub fn use_sign_out() -> Callback<()> {
    let mut auth = use_auth();
    use_callback(move |_: ()| {
        auth.clear_auth();
        spawn(async move {
            session_store().clear().await;
        });
        navigator().replace(Route::Login {});
    })
}
