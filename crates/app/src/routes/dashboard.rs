use crate::auth::use_auth;
use crate::routes::{guard::home_route, Route};
use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Button, Card, CardContent, PageHeader, PageSubtitle, PageTitle};

/// A shortcut card on the hub.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub target: Route,
}

/// Shortcuts offered to each role. Every target is a real route.
pub fn role_features(role: Role) -> Vec<Feature> {
    match role {
        Role::Admin => vec![
            Feature {
                title: "User Management",
                description: "Create and manage user accounts and departments",
                icon: "\u{1F465}",
                target: Route::UserManagement {},
            },
            Feature {
                title: "System Analytics",
                description: "View comprehensive reports and performance metrics",
                icon: "\u{1F4CA}",
                target: Route::Analytics {},
            },
            Feature {
                title: "Department Overview",
                description: "Monitor workflow activity across all departments",
                icon: "\u{1F3E2}",
                target: Route::AdminDashboard {},
            },
        ],
        Role::Manager => vec![
            Feature {
                title: "Pending Approvals",
                description: "Review and approve team workflow requests",
                icon: "\u{2705}",
                target: Route::ManagerDashboard {},
            },
            Feature {
                title: "AI Insights",
                description: "Get intelligent approval recommendations",
                icon: "\u{1F916}",
                target: Route::ManagerDashboard {},
            },
            Feature {
                title: "Team Analytics",
                description: "Monitor your team's workflow activity",
                icon: "\u{1F4C8}",
                target: Route::Analytics {},
            },
        ],
        Role::User => vec![
            Feature {
                title: "Submit Request",
                description: "Create new workflow requests and applications",
                icon: "\u{1F4DD}",
                target: Route::UserDashboard {},
            },
            Feature {
                title: "Track Status",
                description: "Monitor your submitted workflow progress",
                icon: "\u{1F4CB}",
                target: Route::UserDashboard {},
            },
            Feature {
                title: "Request History",
                description: "View your complete workflow history",
                icon: "\u{1F552}",
                target: Route::UserDashboard {},
            },
        ],
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let home = home_route(Some(user.role));
    let features = role_features(user.role);
    let name = user.display_name().to_string();

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Quick Actions" }
                    PageSubtitle { "Welcome back, {name}" }
                }
            }

            div { class: "actions-grid",
                Card { class: "action-card primary-card",
                    CardContent {
                        div { class: "card-icon", "\u{1F680}" }
                        h3 { class: "card-title", "Go to Dashboard" }
                        p { class: "card-description", "Open the workspace for your role" }
                        Button {
                            onclick: move |_| {
                                navigator().push(home.clone());
                            },
                            "Go to Dashboard"
                        }
                    }
                }
                for feature in features {
                    Link {
                        key: "{feature.title}",
                        to: feature.target.clone(),
                        class: "action-card feature-card",
                        div { class: "card-icon", "{feature.icon}" }
                        div { class: "card-content",
                            h3 { class: "card-title", "{feature.title}" }
                            p { class: "card-description", "{feature.description}" }
                        }
                        span { class: "card-arrow", "\u{2192}" }
                    }
                }
            }
        }
    }
}
