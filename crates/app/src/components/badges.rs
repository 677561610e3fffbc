use dioxus::prelude::*;
use shared_types::{Role, WorkflowStatus};
use shared_ui::{Badge, BadgeVariant};

pub fn status_badge_variant(status: WorkflowStatus) -> BadgeVariant {
    match status {
        WorkflowStatus::Approved => BadgeVariant::Success,
        WorkflowStatus::Rejected => BadgeVariant::Destructive,
        WorkflowStatus::Pending | WorkflowStatus::Other => BadgeVariant::Warning,
        WorkflowStatus::Review => BadgeVariant::Info,
    }
}

pub fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Manager => BadgeVariant::Primary,
        Role::User => BadgeVariant::Secondary,
    }
}

#[component]
pub fn StatusBadge(status: WorkflowStatus) -> Element {
    rsx! {
        Badge { variant: status_badge_variant(status), class: "status-badge", "{status}" }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    rsx! {
        Badge { variant: role_badge_variant(role), class: "role-badge", "{role}" }
    }
}
