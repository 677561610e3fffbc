use dioxus::prelude::*;

/// Prepend a part's own class to the caller's attributes.
fn part(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface grouping related content, such as one workflow or user.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Title row. Trailing children (a badge, a button) sit at the far end.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Card heading, rendered as `h3`.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-title", attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

/// Muted line under the title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-description", attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Bottom row of a card, usually holding actions.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = part("card-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}
