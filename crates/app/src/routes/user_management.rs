use crate::components::{CreateUserDialog, RoleBadge};
use crate::use_api;
use dioxus::prelude::*;
use shared_types::User;
use shared_ui::{
    use_toast, Alert, AlertDialogAction, AlertDialogActions, AlertDialogCancel,
    AlertDialogContent, AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, AlertVariant,
    Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, LoadingState, PageActions, PageHeader,
    PageSubtitle, PageTitle, ToastOptions,
};

#[component]
fn UserTable(users: Vec<User>, on_delete: EventHandler<User>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Username" }
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Department" }
                DataTableColumn { "Role" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                for user in users {
                    DataTableRow { key: "{user.id}",
                        DataTableCell { "{user.username}" }
                        DataTableCell { {user.display_name().to_string()} }
                        DataTableCell { "{user.email}" }
                        DataTableCell {
                            span { class: "department-badge", "{user.department}" }
                        }
                        DataTableCell { RoleBadge { role: user.role } }
                        DataTableCell {
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let user = user.clone();
                                    move |_| on_delete.call(user.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Every account, with create and delete.
#[component]
pub fn UserManagement() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut show_create = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<User>::None);
    let mut deleting = use_signal(|| false);

    let mut users = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_users().await }
        }
    });

    let handle_delete = move |_| {
        let Some(user) = pending_delete() else {
            return;
        };
        let api = api.clone();
        deleting.set(true);
        spawn(async move {
            match api.delete_user(&user.id).await {
                Ok(()) => {
                    toast.success(format!("User {} deleted", user.username), ToastOptions::new());
                    users.restart();
                }
                Err(e) => {
                    toast.error(format!("Failed to delete user: {}", e.message), ToastOptions::new());
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let total = match &*users.read() {
        Some(Ok(list)) => list.len(),
        _ => 0,
    };
    let confirm_name = pending_delete
        .read()
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "User Management" }
                    PageSubtitle { "Total Users: {total}" }
                }
                PageActions {
                    Button { onclick: move |_| show_create.set(true), "+ Create New User" }
                }
            }

            match &*users.read() {
                None => rsx! {
                    LoadingState { message: "Loading users..." }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.message}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState {
                        title: "No Users Found",
                        description: "Get started by creating the first user",
                    }
                },
                Some(Ok(list)) => rsx! {
                    UserTable {
                        users: list.clone(),
                        on_delete: move |u: User| pending_delete.set(Some(u)),
                    }
                },
            }

            CreateUserDialog {
                open: show_create,
                on_created: move |_| users.restart(),
            }

            AlertDialogRoot {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete User" }
                    AlertDialogDescription {
                        "Delete {confirm_name}? This action cannot be undone."
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction {
                            on_click: handle_delete,
                            if deleting() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
