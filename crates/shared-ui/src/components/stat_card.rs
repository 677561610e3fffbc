use dioxus::prelude::*;

use super::card::{Card, CardContent, CardHeader};

/// A single headline number with a caption.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] caption: String,
    #[props(default)] tone: String,
) -> Element {
    let class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-{tone}")
    };

    rsx! {
        Card { class: "{class}",
            CardHeader { "{title}" }
            CardContent {
                span { class: "stat-value", "{value}" }
                if !caption.is_empty() {
                    span { class: "stat-label", "{caption}" }
                }
            }
        }
    }
}

#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
