use crate::auth::use_auth;
use crate::routes::Route;
use crate::storage::session_store;
use crate::use_api;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};

/// Username/password sign-in.
///
/// Blank fields are rejected by the client before any request. On success
/// the session is persisted, the auth context updated and the dashboard shown.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let result: Result<_, AppError> = async {
                let response = api.login(&username(), &password()).await?;
                session_store().establish(response).await
            }
            .await;

            match result {
                Ok(session) => {
                    tracing::info!(username = %session.user.username, role = %session.user.role, "Signed in");
                    auth.set_user(session.user);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign in failed");
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-brand", "Workflow Platform" }
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your workflows" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "username",
                            label: "Username",
                            placeholder: "Enter your username",
                            value: username(),
                            disabled: loading(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing In..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
