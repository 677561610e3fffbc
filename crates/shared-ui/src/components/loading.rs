use dioxus::prelude::*;

/// Centered loading line with a spinner.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-state",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}
