use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use backend::ApiClient;
use serde_json::Value;
use shared_types::ClientConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counts requests reaching a mock handler.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Request bodies captured by a mock handler, in arrival order.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<(String, Value)>>>);

impl Captured {
    pub fn push(&self, path: impl Into<String>, body: Value) {
        self.0.lock().unwrap().push((path.into(), body));
    }

    pub fn all(&self) -> Vec<(String, Value)> {
        self.0.lock().unwrap().clone()
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

/// Client pointing both the backend and the AI service at `base`.
///
/// The AI analytics route is `{base}/ai/api/analytics`.
pub fn client(base: &str) -> ApiClient {
    ApiClient::new(ClientConfig::for_base_url(base))
}

/// A JSON error body as the backend sends it.
pub fn error_body(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({ "error": message })))
}

pub fn manager_json() -> Value {
    serde_json::json!({
        "id": "b7e2",
        "username": "manager1",
        "email": "john@company.com",
        "role": "MANAGER",
        "department": "Finance",
        "password": null
    })
}

pub fn workflow_json(id: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": "New laptop",
        "description": "Replacement for broken unit",
        "type": "PURCHASE",
        "status": status,
        "amount": 1450.5,
        "department": "Finance",
        "createdAt": "2025-03-04T09:15:30.123456"
    })
}
