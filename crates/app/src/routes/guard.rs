//! Route access rules, kept free of rendering so they can be tested directly.

use shared_types::{Role, User};

use super::Route;

/// Who may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Signed-out visitors only; signed-in users are sent to the dashboard.
    Guest,
    SignedIn,
    Role(Role),
    /// No check. Also used for the root redirect.
    Open,
}

pub fn required_access(route: &Route) -> Access {
    match route {
        Route::Login {} => Access::Guest,
        Route::Dashboard {} | Route::Analytics {} => Access::SignedIn,
        Route::AdminDashboard {} | Route::UserManagement {} => Access::Role(Role::Admin),
        Route::ManagerDashboard {} => Access::Role(Role::Manager),
        Route::UserDashboard {} => Access::Role(Role::User),
        Route::Root {} | Route::NotFound { .. } => Access::Open,
    }
}

/// Landing screen for a role.
pub fn home_route(role: Option<Role>) -> Route {
    match role {
        Some(Role::Admin) => Route::AdminDashboard {},
        Some(Role::Manager) => Route::ManagerDashboard {},
        Some(Role::User) => Route::UserDashboard {},
        None => Route::Login {},
    }
}

/// Where to send `user` instead of `route`, or `None` to render it.
pub fn resolve(route: &Route, user: Option<&User>) -> Option<Route> {
    if let Route::Root {} = route {
        return Some(match user {
            Some(_) => Route::Dashboard {},
            None => Route::Login {},
        });
    }
    match (required_access(route), user) {
        (Access::Open, _) => None,
        (Access::Guest, None) => None,
        (Access::Guest, Some(_)) => Some(Route::Dashboard {}),
        (Access::SignedIn, Some(_)) => None,
        (Access::SignedIn | Access::Role(_), None) => Some(Route::Login {}),
        (Access::Role(required), Some(u)) if u.role == required => None,
        (Access::Role(_), Some(_)) => Some(Route::Dashboard {}),
    }
}
