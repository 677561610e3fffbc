use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role, ALL_ROLES, DEPARTMENTS};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, ToastOptions,
};
use std::collections::HashMap;

use crate::use_api;

/// "Add New User" dialog posting to the register endpoint.
///
/// `on_created` fires after the backend accepted the account.
#[component]
pub fn CreateUserDialog(open: Signal<bool>, on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut department = use_signal(|| "Engineering".to_string());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let mut reset = move || {
        username.set(String::new());
        email.set(String::new());
        password.set(String::new());
        role.set(Role::User);
        department.set("Engineering".to_string());
        field_errors.set(HashMap::new());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let body = RegisterRequest {
            username: username().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: role(),
            department: department(),
        };
        saving.set(true);
        field_errors.set(HashMap::new());
        spawn(async move {
            match api.register(&body).await {
                Ok(()) => {
                    toast.success("User created successfully!".to_string(), ToastOptions::new());
                    reset();
                    open.set(false);
                    on_created.call(());
                }
                Err(e) if !e.field_errors.is_empty() => field_errors.set(e.field_errors),
                Err(e) => {
                    toast.error(format!("Failed to create user: {}", e.message), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    rsx! {
        DialogRoot {
            open: open(),
            on_open_change: move |v| open.set(v),
            DialogContent {
                DialogTitle { "Add New User" }
                DialogDescription { "Create an account and assign its role and department." }
                form { class: "dialog-form", onsubmit: handle_submit,
                    Input {
                        id: "new-user-username",
                        label: "Username",
                        value: username(),
                        required: true,
                        error: error_for("username"),
                        on_input: move |e: FormEvent| username.set(e.value()),
                    }
                    Input {
                        id: "new-user-email",
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        required: true,
                        error: error_for("email"),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Input {
                        id: "new-user-password",
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        required: true,
                        error: error_for("password"),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    FormSelect {
                        id: "new-user-role",
                        label: "Role",
                        value: role().as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            if let Some(r) = Role::parse(&e.value()) {
                                role.set(r);
                            }
                        },
                        for r in ALL_ROLES.iter() {
                            option { value: r.as_str(), "{r.label()}" }
                        }
                    }
                    FormSelect {
                        id: "new-user-department",
                        label: "Department",
                        value: department(),
                        onchange: move |e: Event<FormData>| department.set(e.value()),
                        for d in DEPARTMENTS.iter() {
                            option { value: *d, "{d}" }
                        }
                    }
                    div { class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            disabled: saving(),
                            if saving() { "Creating..." } else { "Create User" }
                        }
                    }
                }
            }
        }
    }
}
