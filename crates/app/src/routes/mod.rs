pub mod admin;
pub mod analytics;
pub mod dashboard;
pub mod guard;
pub mod login;
pub mod manager;
pub mod not_found;
pub mod user_home;
pub mod user_management;

use crate::auth::{use_auth, use_sign_out};
use crate::components::RoleBadge;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdFileText, LdLayoutDashboard, LdLogOut, LdShield, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant, LoadingState};

use admin::AdminDashboard;
use analytics::Analytics;
use dashboard::Dashboard;
use login::Login;
use manager::ManagerDashboard;
use not_found::NotFound;
use user_home::UserDashboard;
use user_management::UserManagement;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(RouteGuard)]
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/users")]
    UserManagement {},
    #[route("/manager")]
    ManagerDashboard {},
    #[route("/user")]
    UserDashboard {},
    #[route("/analytics")]
    Analytics {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Applies [`guard::resolve`] to the current route.
///
/// Renders the restore placeholder until the stored session has been read.
#[component]
fn RouteGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !auth.is_restored() {
        return rsx! {
            div { class: "app-loading",
                LoadingState { message: "Loading Workflow Platform..." }
            }
        };
    }

    let user = auth.user();
    match guard::resolve(&route, user.as_ref()) {
        Some(target) => {
            tracing::info!(from = %route, to = %target, "Redirecting");
            navigator().replace(target);
            rsx! {
                div { class: "app-loading",
                    p { "Redirecting..." }
                }
            }
        }
        None => rsx! { Outlet::<Route> {} },
    }
}

/// The root path only ever redirects.
#[component]
fn Root() -> Element {
    rsx! {}
}

/// Top bar with role navigation and sign-out around every signed-in screen.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let sign_out = use_sign_out();

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let home = guard::home_route(Some(user.role));

    let (home_label, home_icon) = match user.role {
        Role::Admin => ("Admin", rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } }),
        Role::Manager => (
            "Approvals",
            rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        ),
        Role::User => (
            "My Requests",
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        ),
    };
    let is_admin = user.role == Role::Admin;
    let name = user.display_name().to_string();

    rsx! {
        div { class: "app-shell",
            nav { class: "app-nav",
                span { class: "app-brand", "Workflow Platform" }
                div { class: "app-nav-links",
                    Link {
                        to: Route::Dashboard {},
                        class: "nav-link",
                        active_class: "active",
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Dashboard"
                    }
                    Link {
                        to: home,
                        class: "nav-link",
                        active_class: "active",
                        {home_icon}
                        "{home_label}"
                    }
                    if is_admin {
                        Link {
                            to: Route::UserManagement {},
                            class: "nav-link",
                            active_class: "active",
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Users"
                        }
                    }
                    Link {
                        to: Route::Analytics {},
                        class: "nav-link",
                        active_class: "active",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                        "Analytics"
                    }
                }
                div { class: "app-nav-user",
                    span { class: "app-nav-name", "{name}" }
                    RoleBadge { role: user.role }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| sign_out.call(()),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }
            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
