use crate::auth::use_auth;
use crate::components::{CreateWorkflowDialog, WorkflowCardList};
use crate::use_api;
use dioxus::prelude::*;
use shared_ui::{
    Alert, AlertVariant, Button, EmptyState, LoadingState, PageActions, PageHeader, PageSubtitle,
    PageTitle,
};

/// The signed-in user's own requests, with a dialog to submit a new one.
#[component]
pub fn UserDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut show_create = use_signal(|| false);

    let user = auth.user();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    let mut workflows = use_resource({
        let username = username.clone();
        move || {
            let api = api.clone();
            let username = username.clone();
            async move { api.list_user_workflows(&username).await }
        }
    });

    let Some(user) = user else {
        return rsx! {};
    };
    let name = user.display_name().to_string();

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Workflow Dashboard" }
                    PageSubtitle { "Welcome back, {name}" }
                }
                PageActions {
                    Button { onclick: move |_| show_create.set(true), "Create New Request" }
                }
            }

            section { class: "section",
                div { class: "section-header",
                    h2 { "My Requests" }
                    p { class: "section-subtitle", "Track and manage your workflow submissions" }
                }

                match &*workflows.read() {
                    None => rsx! {
                        LoadingState { message: "Loading your requests..." }
                    },
                    Some(Err(e)) => rsx! {
                        Alert { variant: AlertVariant::Error, "{e.message}" }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "No Requests Found",
                            description: "You haven't created any workflow requests yet",
                            Button { onclick: move |_| show_create.set(true), "Create Your First Request" }
                        }
                    },
                    Some(Ok(list)) => rsx! {
                        WorkflowCardList { workflows: list.clone() }
                    },
                }
            }

            CreateWorkflowDialog {
                open: show_create,
                username: username.clone(),
                on_created: move |_| workflows.restart(),
            }
        }
    }
}
