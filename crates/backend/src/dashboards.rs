//! Screen-level loads that combine or guard several API calls.

use shared_types::{AnalyticsReport, AppError, User, Workflow};

use crate::api::ApiClient;

pub const MISSING_DEPARTMENT: &str = "Manager department not found. Please log in again.";

/// Users, all workflows and the backend report, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminData {
    pub users: Vec<User>,
    pub workflows: Vec<Workflow>,
    pub analytics: AnalyticsReport,
}

/// Issue the three admin requests concurrently; the first failure wins.
pub async fn load_admin_data(client: &ApiClient) -> Result<AdminData, AppError> {
    let (users, workflows, analytics) = futures::try_join!(
        client.list_users(),
        client.list_workflows(),
        client.workflow_analytics(),
    )?;
    tracing::info!(
        users = users.len(),
        workflows = workflows.len(),
        "Admin overview loaded"
    );
    Ok(AdminData {
        users,
        workflows,
        analytics,
    })
}

/// Pending workflows for a manager's department.
///
/// A missing or blank department fails with [`MISSING_DEPARTMENT`] before
/// any request is made.
pub async fn load_department_queue(
    client: &ApiClient,
    department: Option<String>,
) -> Result<Vec<Workflow>, AppError> {
    let Some(department) = department.filter(|d| !d.trim().is_empty()) else {
        tracing::warn!("Manager has no department");
        return Err(AppError::bad_request(MISSING_DEPARTMENT));
    };
    client.list_pending_workflows(&department).await
}
