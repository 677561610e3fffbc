use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
        }
    }
}

/// Full-width inline banner.
#[component]
pub fn Alert(#[props(default)] variant: AlertVariant, children: Element) -> Element {
    rsx! {
        div { class: "alert", role: "alert", "data-style": variant.class(),
            {children}
        }
    }
}
