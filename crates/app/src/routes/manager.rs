use crate::auth::use_auth;
use crate::components::WorkflowCard;
use crate::use_api;
use dioxus::prelude::*;
use shared_types::{ApprovalPrediction, Decision, Suggestion, Workflow};
use shared_ui::{
    use_toast, Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, EmptyState,
    LoadingState, PageHeader, PageSubtitle, PageTitle, ToastOptions,
};
use std::collections::{HashMap, HashSet};

/// Pending items that have not been decided in this view yet.
fn undecided(pending: &[Workflow], decided: &HashSet<String>) -> Vec<Workflow> {
    pending
        .iter()
        .filter(|wf| !decided.contains(&wf.id))
        .cloned()
        .collect()
}

fn suggestion_variant(s: Suggestion) -> BadgeVariant {
    match s {
        Suggestion::Approve => BadgeVariant::Success,
        Suggestion::Review => BadgeVariant::Warning,
        Suggestion::Reject => BadgeVariant::Destructive,
    }
}

#[component]
fn InsightPanel(prediction: ApprovalPrediction) -> Element {
    let percent = prediction.percent();
    let confidence = (prediction.confidence.clamp(0.0, 1.0) * 100.0).round() as u8;
    rsx! {
        div { class: "insight-panel",
            span { class: "insight-probability", "{percent}% likely to be approved" }
            Badge {
                variant: suggestion_variant(prediction.suggestion),
                "{prediction.suggestion.as_str()}"
            }
            span { class: "insight-confidence", "Confidence {confidence}%" }
            if prediction.fallback {
                span { class: "insight-note", "Rule-based estimate" }
            }
        }
    }
}

/// Pending approvals for the manager's department.
#[component]
pub fn ManagerDashboard() -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();

    let mut decided = use_signal(HashSet::<String>::new);
    let mut busy = use_signal(|| Option::<String>::None);
    let mut insights = use_signal(HashMap::<String, Result<ApprovalPrediction, String>>::new);

    let user = auth.user();
    let manager = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let department = user
        .as_ref()
        .filter(|u| u.has_department())
        .map(|u| u.department.clone());

    let pending = use_resource({
        let api = api.clone();
        let department = department.clone();
        move || {
            let api = api.clone();
            let department = department.clone();
            async move { backend::load_department_queue(&api, department).await }
        }
    });

    let decide = {
        let api = api.clone();
        move |id: String, decision: Decision| {
            let api = api.clone();
            let manager = manager.clone();
            busy.set(Some(id.clone()));
            spawn(async move {
                match api.update_workflow_status(&id, decision, &manager).await {
                    Ok(updated) => {
                        decided.write().insert(id);
                        let verb = updated.status.as_str().to_lowercase();
                        toast.success(format!("Workflow {verb} successfully!"), ToastOptions::new());
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, workflow_id = %id, "Status update failed");
                        toast.error("Failed to update workflow status.".to_string(), ToastOptions::new());
                    }
                }
                busy.set(None);
            });
        }
    };

    let load_insight = move |id: String| {
        let api = api.clone();
        spawn(async move {
            let result = api.approval_prediction(&id).await.map_err(|e| e.message);
            insights.write().insert(id, result);
        });
    };

    let dept_label = department.clone().unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Manager Dashboard" }
                    PageSubtitle { "Pending approvals for {dept_label}" }
                }
            }

            match &*pending.read() {
                None => rsx! {
                    LoadingState { message: "Loading pending workflows..." }
                },
                Some(Err(e)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{e.message}" }
                },
                Some(Ok(list)) => {
                    let visible = undecided(list, &decided.read());
                    if visible.is_empty() {
                        rsx! {
                            EmptyState {
                                title: "No Pending Workflows",
                                description: "Everything in your department has been reviewed",
                            }
                        }
                    } else {
                        rsx! {
                            div { class: "workflow-grid",
                                for wf in visible {
                                    WorkflowCard {
                                        key: "{wf.id}",
                                        workflow: wf.clone(),
                                        show_submitter: true,
                                        {
                                            let id = wf.id.clone();
                                            let is_busy = busy().as_deref() == Some(id.as_str());
                                            let insight = insights.read().get(&id).cloned();
                                            let mut decide_approve = decide.clone();
                                            let mut decide_reject = decide.clone();
                                            let mut load_insight = load_insight.clone();
                                            let (approve_id, reject_id, insight_id) =
                                                (id.clone(), id.clone(), id.clone());
                                            rsx! {
                                                div { class: "workflow-actions",
                                                    Button {
                                                        variant: ButtonVariant::Success,
                                                        disabled: is_busy,
                                                        onclick: move |_| decide_approve(approve_id.clone(), Decision::Approve),
                                                        "Approve"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        disabled: is_busy,
                                                        onclick: move |_| decide_reject(reject_id.clone(), Decision::Reject),
                                                        "Reject"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        onclick: move |_| load_insight(insight_id.clone()),
                                                        "AI Insight"
                                                    }
                                                }
                                                match insight {
                                                    Some(Ok(prediction)) => rsx! { InsightPanel { prediction } },
                                                    Some(Err(msg)) => rsx! {
                                                        Alert { variant: AlertVariant::Warning, "{msg}" }
                                                    },
                                                    None => rsx! {},
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
