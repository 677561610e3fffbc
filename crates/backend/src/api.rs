use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{
    AnalyticsReport, AppError, ApprovalPrediction, ClientConfig, Decision, LoginRequest,
    LoginResponse, NewWorkflow, RegisterRequest, StatusUpdate, User, Workflow,
};

use crate::error_convert::{response_to_app_error, ReqwestErrorExt, ValidateRequest};

/// HTTP client for the workflow backend and the analytics service.
///
/// Every method maps failures into [`AppError`]; callers only ever show
/// `AppError::message`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

fn with_timeout(request: RequestBuilder, secs: u64) -> RequestBuilder {
    #[cfg(not(target_arch = "wasm32"))]
    {
        request.timeout(std::time::Duration::from_secs(secs))
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = secs;
        request
    }
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        with_timeout(
            self.http.get(self.config.url(path)),
            self.config.request_timeout_secs,
        )
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| e.into_app_error())?;
        if !response.status().is_success() {
            return Err(response_to_app_error(response, fallback).await);
        }
        response.json::<T>().await.map_err(|e| e.into_app_error())
    }

    /// Send and discard the body of a successful response.
    async fn send_unit(&self, request: RequestBuilder, fallback: &str) -> Result<(), AppError> {
        let response = request.send().await.map_err(|e| e.into_app_error())?;
        if !response.status().is_success() {
            return Err(response_to_app_error(response, fallback).await);
        }
        Ok(())
    }

    /// `POST /api/auth/login`.
    ///
    /// Blank fields are rejected before any request is made.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = LoginRequest::from_form(username, password)?;
        tracing::info!(username = %body.username, "Signing in");
        let request = with_timeout(
            self.http.post(self.config.url("/api/auth/login")).json(&body),
            self.config.request_timeout_secs,
        );
        self.send(request, "Authentication failed").await
    }

    /// `POST /api/auth/register`.
    pub async fn register(&self, body: &RegisterRequest) -> Result<(), AppError> {
        body.validate_request()?;
        let request = with_timeout(
            self.http.post(self.config.url("/api/auth/register")).json(body),
            self.config.request_timeout_secs,
        );
        self.send_unit(request, "Failed to create user").await?;
        tracing::info!(username = %body.username, role = %body.role, "User registered");
        Ok(())
    }

    /// `GET /api/users`.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.send(self.get("/api/users"), "Failed to load users")
            .await
    }

    /// `DELETE /api/users/{id}`.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let request = with_timeout(
            self.http
                .delete(self.config.url(&format!("/api/users/{}", segment(id)))),
            self.config.request_timeout_secs,
        );
        self.send_unit(request, "Failed to delete user").await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// `GET /api/workflows`.
    pub async fn list_workflows(&self) -> Result<Vec<Workflow>, AppError> {
        self.send(self.get("/api/workflows"), "Failed to load workflows")
            .await
    }

    /// `GET /api/workflows/user/{username}`.
    pub async fn list_user_workflows(&self, username: &str) -> Result<Vec<Workflow>, AppError> {
        let path = format!("/api/workflows/user/{}", segment(username));
        self.send(self.get(&path), "Failed to load workflows").await
    }

    /// `GET /api/workflows/pending/{department}`.
    pub async fn list_pending_workflows(&self, department: &str) -> Result<Vec<Workflow>, AppError> {
        let path = format!("/api/workflows/pending/{}", segment(department));
        self.send(self.get(&path), "Failed to fetch pending workflows.")
            .await
    }

    /// `POST /api/workflows/{username}`.
    pub async fn create_workflow(
        &self,
        username: &str,
        body: &NewWorkflow,
    ) -> Result<Workflow, AppError> {
        body.validate_request()?;
        let url = self
            .config
            .url(&format!("/api/workflows/{}", segment(username)));
        let request = with_timeout(
            self.http.post(url).json(body),
            self.config.request_timeout_secs,
        );
        let created: Workflow = self.send(request, "Failed to create workflow").await?;
        tracing::info!(workflow_id = %created.id, workflow_type = %created.workflow_type, "Workflow created");
        Ok(created)
    }

    /// `PUT /api/workflows/{id}/status`.
    pub async fn update_workflow_status(
        &self,
        id: &str,
        decision: Decision,
        manager_username: &str,
    ) -> Result<Workflow, AppError> {
        let body = StatusUpdate::new(decision, manager_username);
        let url = self
            .config
            .url(&format!("/api/workflows/{}/status", segment(id)));
        let request = with_timeout(
            self.http.put(url).json(&body),
            self.config.request_timeout_secs,
        );
        let updated: Workflow = self
            .send(request, "Failed to update workflow status.")
            .await?;
        tracing::info!(workflow_id = id, status = %body.status, "Workflow status updated");
        Ok(updated)
    }

    /// `GET /api/workflows/analytics`.
    pub async fn workflow_analytics(&self) -> Result<AnalyticsReport, AppError> {
        self.send(self.get("/api/workflows/analytics"), "Failed to load analytics")
            .await
    }

    /// Analytics straight from the AI service, with the shorter timeout.
    pub async fn ai_service_analytics(&self) -> Result<AnalyticsReport, AppError> {
        let request = with_timeout(
            self.http.get(&self.config.analytics_fallback_url),
            self.config.fallback_timeout_secs,
        );
        self.send(request, "Failed to load analytics").await
    }

    /// `GET /api/workflows/{id}/ai-prediction`.
    pub async fn approval_prediction(&self, id: &str) -> Result<ApprovalPrediction, AppError> {
        let path = format!("/api/workflows/{}/ai-prediction", segment(id));
        self.send(self.get(&path), "Failed to load AI insight").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(segment("Human Resources"), "Human%20Resources");
        assert_eq!(segment("a/b"), "a%2Fb");
        assert_eq!(segment("alice"), "alice");
    }

    #[tokio::test]
    async fn blank_login_fails_without_a_server() {
        // Nothing listens on port 9, so a sent request would be a network error.
        let client = ApiClient::new(ClientConfig::for_base_url("http://127.0.0.1:9"));
        let err = client.login("", "secret").await.unwrap_err();
        assert_eq!(err.message, shared_types::MISSING_CREDENTIALS);
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn invalid_new_workflow_fails_before_sending() {
        let client = ApiClient::new(ClientConfig::for_base_url("http://127.0.0.1:9"));
        let body = NewWorkflow::from_form("", "", shared_types::WorkflowType::Leave, "").unwrap();
        let err = client.create_workflow("alice", &body).await.unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::ValidationError);
    }
}
