use dioxus::prelude::*;
use shared_types::Workflow;
use shared_ui::{
    Card, CardContent, CardFooter, CardHeader, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow,
};

use super::badges::StatusBadge;
use crate::format_helpers::{format_currency, format_optional_date};

/// One workflow as a card. `children` render in the footer, e.g. approval buttons.
#[component]
pub fn WorkflowCard(
    workflow: Workflow,
    #[props(default)] show_submitter: bool,
    #[props(default)] children: Element,
) -> Element {
    let wf = &workflow;
    let ty = wf.workflow_type;
    let submitted = format_optional_date(wf.created_at.as_ref());

    rsx! {
        Card { class: "workflow-card",
            CardHeader {
                div { class: "workflow-type",
                    span { class: "type-icon", "{ty.icon()}" }
                    span { class: "type-label", "{ty}" }
                }
                StatusBadge { status: wf.status }
            }
            CardContent {
                h3 { class: "workflow-title", "{wf.title}" }
                if let Some(desc) = wf.description.as_deref() {
                    p { class: "workflow-description", "{desc}" }
                }
                dl { class: "workflow-details",
                    if let Some(amount) = wf.display_amount() {
                        dt { "Amount:" }
                        dd { {format_currency(amount)} }
                    }
                    dt { "Submitted:" }
                    dd { "{submitted}" }
                    if let Some(dept) = wf.department.as_deref() {
                        dt { "Department:" }
                        dd { "{dept}" }
                    }
                    if show_submitter {
                        if let Some(name) = wf.submitter_name() {
                            dt { "Submitted By:" }
                            dd { "{name}" }
                        }
                    }
                    if let Some(name) = wf.approver_name() {
                        dt { "Approved By:" }
                        dd { "{name}" }
                    }
                }
            }
            CardFooter { {children} }
        }
    }
}

/// Cards for a list of workflows, in the order given.
#[component]
pub fn WorkflowCardList(workflows: Vec<Workflow>) -> Element {
    rsx! {
        div { class: "workflow-grid",
            for wf in workflows {
                WorkflowCard { key: "{wf.id}", workflow: wf.clone() }
            }
        }
    }
}

/// All workflows as a table, as shown to admins.
#[component]
pub fn WorkflowTable(workflows: Vec<Workflow>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Title" }
                DataTableColumn { "Type" }
                DataTableColumn { "Status" }
                DataTableColumn { "Submitted By" }
                DataTableColumn { "Department" }
                DataTableColumn { "Amount" }
                DataTableColumn { "Created" }
            }
            DataTableBody {
                for wf in workflows {
                    DataTableRow { key: "{wf.id}",
                        DataTableCell { "{wf.title}" }
                        DataTableCell { span { class: "type-badge", "{wf.workflow_type}" } }
                        DataTableCell { StatusBadge { status: wf.status } }
                        DataTableCell { {wf.submitter_name().unwrap_or("N/A").to_string()} }
                        DataTableCell { {wf.department.clone().unwrap_or_default()} }
                        DataTableCell { {format_currency(wf.amount.unwrap_or(0.0))} }
                        DataTableCell { {format_optional_date(wf.created_at.as_ref())} }
                    }
                }
            }
        }
    }
}
