use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `DataTableColumn`s in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_inside_tbody() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                }
                DataTableBody {
                    for name in ["a", "b"] {
                        DataTableRow { key: "{name}",
                            DataTableCell { "{name}" }
                        }
                    }
                }
            }
        });
        assert_eq!(html.matches("<tr class=\"data-table-row\"").count(), 2);
        assert!(html.contains("<th>Name</th>"));
    }
}
