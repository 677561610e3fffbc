use dioxus::prelude::*;

/// Placeholder shown in place of an empty list.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { "{title}" }
            if !description.is_empty() {
                p { "{description}" }
            }
            {children}
        }
    }
}
