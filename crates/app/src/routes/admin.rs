use crate::components::{CreateUserDialog, RoleBadge, WorkflowTable};
use crate::use_api;
use dioxus::prelude::*;
use shared_types::{tally, AnalyticsReport, AppError, User, Workflow, WorkflowStatus};
use shared_ui::{
    Alert, AlertVariant, Bar, BarList, Button, Card, CardContent, CardHeader, CardTitle,
    EmptyState, LoadingState, PageActions, PageHeader, PageSubtitle, PageTitle, StatCard,
    StatGrid, TabContent, TabList, TabTrigger, Tabs,
};

/// Everything the admin screen shows, loaded in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub users: Vec<User>,
    pub workflows: Vec<Workflow>,
    pub analytics: AnalyticsReport,
}

impl AdminOverview {
    /// Headline numbers: users, workflows, pending, approved.
    ///
    /// Workflow totals come from the backend report; the approved count is
    /// taken from the loaded list.
    pub fn stats(&self) -> [(&'static str, String); 4] {
        let approved = self
            .workflows
            .iter()
            .filter(|wf| wf.status == WorkflowStatus::Approved)
            .count();
        [
            ("Total Users", self.users.len().to_string()),
            ("Total Workflows", self.analytics.summary.total_workflows.to_string()),
            ("Pending Approvals", self.analytics.summary.pending_workflows.to_string()),
            ("Approved", approved.to_string()),
        ]
    }

    pub fn pending_count(&self) -> usize {
        self.workflows
            .iter()
            .filter(|wf| wf.status == WorkflowStatus::Pending)
            .count()
    }

    pub fn by_type(&self) -> Vec<Bar> {
        bars(tally(self.workflows.iter().map(|wf| wf.workflow_type.as_str())))
    }

    pub fn by_status(&self) -> Vec<Bar> {
        bars(tally(self.workflows.iter().map(|wf| wf.status.as_str())))
    }

    pub fn users_by_role(&self) -> Vec<Bar> {
        bars(tally(self.users.iter().map(|u| u.role.as_str())))
    }
}

fn bars(counts: Vec<(&str, usize)>) -> Vec<Bar> {
    counts
        .into_iter()
        .map(|(label, n)| Bar::new(label, n as f64))
        .collect()
}

async fn load_overview(api: backend::ApiClient) -> Result<AdminOverview, AppError> {
    let data = backend::load_admin_data(&api).await?;
    Ok(AdminOverview {
        users: data.users,
        workflows: data.workflows,
        analytics: data.analytics,
    })
}

#[component]
fn UserCard(user: User) -> Element {
    rsx! {
        Card { class: "user-card",
            CardHeader {
                CardTitle { "{user.username}" }
                RoleBadge { role: user.role }
            }
            CardContent {
                dl { class: "user-details",
                    dt { "Email:" }
                    dd { "{user.email}" }
                    dt { "Department:" }
                    dd { "{user.department}" }
                    dt { "User ID:" }
                    dd { "{user.id}" }
                }
            }
        }
    }
}

#[component]
fn Breakdown(title: String, bars: Vec<Bar>) -> Element {
    rsx! {
        Card { class: "breakdown-card",
            CardHeader { CardTitle { "{title}" } }
            CardContent {
                if bars.is_empty() {
                    p { class: "muted", "No data" }
                } else {
                    BarList { bars }
                }
            }
        }
    }
}

/// Users, all workflows and client-side breakdowns for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let mut show_create = use_signal(|| false);

    let mut overview = use_resource(move || load_overview(api.clone()));

    let body = match &*overview.read() {
        None => rsx! {
            LoadingState { message: "Loading dashboard..." }
        },
        Some(Err(e)) => {
            tracing::error!(error = %e, "Admin dashboard load failed");
            rsx! {
                Alert { variant: AlertVariant::Error, "Failed to load data: {e.message}" }
            }
        }
        Some(Ok(data)) => {
            let stats = data.stats();
            let total = data.workflows.len();
            let pending = data.pending_count();
            rsx! {
                StatGrid {
                    for (title, value) in stats {
                        StatCard { key: "{title}", title: title.to_string(), value }
                    }
                }

                Tabs { default_value: "users", horizontal: true,
                    TabList {
                        TabTrigger { value: "users", index: 0usize, "User Management" }
                        TabTrigger { value: "workflows", index: 1usize, "All Workflows" }
                        TabTrigger { value: "analytics", index: 2usize, "Analytics" }
                    }
                    TabContent { value: "users", index: 0usize,
                        if data.users.is_empty() {
                            EmptyState {
                                title: "No Users Found",
                                description: "Get started by creating the first user",
                            }
                        } else {
                            div { class: "user-grid",
                                for user in data.users.iter() {
                                    UserCard { key: "{user.id}", user: user.clone() }
                                }
                            }
                        }
                    }
                    TabContent { value: "workflows", index: 1usize,
                        div { class: "table-summary",
                            span { "Total: {total}" }
                            span { "Pending: {pending}" }
                        }
                        if data.workflows.is_empty() {
                            EmptyState {
                                title: "No Workflows Found",
                                description: "No workflows have been created yet",
                            }
                        } else {
                            WorkflowTable { workflows: data.workflows.clone() }
                        }
                    }
                    TabContent { value: "analytics", index: 2usize,
                        div { class: "breakdown-grid",
                            Breakdown { title: "Workflows by Type", bars: data.by_type() }
                            Breakdown { title: "Workflows by Status", bars: data.by_status() }
                            Breakdown { title: "Users by Role", bars: data.users_by_role() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Admin Dashboard" }
                    PageSubtitle { "Manage users and monitor every workflow" }
                }
                PageActions {
                    Button { onclick: move |_| show_create.set(true), "Add New User" }
                }
            }
            {body}
            CreateUserDialog {
                open: show_create,
                on_created: move |_| overview.restart(),
            }
        }
    }
}
