use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    tracing::warn!(path = %path, "Unknown route");

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Page not found" }
                    CardDescription { "Nothing lives at /{path}." }
                }
                CardContent {
                    Link { to: Route::Root {}, class: "button", "Back to the app" }
                }
            }
        }
    }
}
