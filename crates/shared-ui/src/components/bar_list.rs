use dioxus::prelude::*;

/// One row of a [`BarList`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Bar width as a percentage of `max`, clamped to 0..=100.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn format_value(value: f64, suffix: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}{suffix}")
    } else {
        format!("{value:.1}{suffix}")
    }
}

/// Horizontal bar chart rendered with plain markup.
///
/// `max` defaults to the largest value in `bars`.
#[component]
pub fn BarList(
    bars: Vec<Bar>,
    #[props(default)] max: Option<f64>,
    #[props(default)] suffix: String,
) -> Element {
    let max = max.unwrap_or_else(|| bars.iter().map(|b| b.value).fold(0.0, f64::max));

    rsx! {
        ul { class: "bar-list",
            for bar in bars.iter() {
                li { class: "bar-row", key: "{bar.label}",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div {
                            class: "bar-fill",
                            style: format!(
                                "width: {:.1}%;{}",
                                bar_width(bar.value, max),
                                bar.color.as_ref().map(|c| format!(" background: {c};")).unwrap_or_default()
                            ),
                        }
                    }
                    span { class: "bar-value", {format_value(bar.value, &suffix)} }
                }
            }
        }
    }
}
