use axum::{http::StatusCode, routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CONNECTION_FAILED, INVALID_RESPONSE};

use crate::common;

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let base = common::dead_base_url().await;

    let err = common::client(&base).list_workflows().await.unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.message, CONNECTION_FAILED);
}

#[tokio::test]
async fn server_error_without_json_uses_fallback_message() {
    let router = Router::new().route(
        "/api/workflows/pending/{department}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = common::serve(router).await;

    let err = common::client(&base)
        .list_pending_workflows("IT")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Failed to fetch pending workflows.");
}

#[tokio::test]
async fn message_field_is_used_when_error_is_absent() {
    let router = Router::new().route(
        "/api/workflows",
        get(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Admins only" })),
            )
        }),
    );
    let base = common::serve(router).await;

    let err = common::client(&base).list_workflows().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Admins only");
}

#[tokio::test]
async fn malformed_success_body_is_an_invalid_response() {
    let router = Router::new().route(
        "/api/users",
        get(|| async { Json(json!({ "users": "not a list" })) }),
    );
    let base = common::serve(router).await;

    let err = common::client(&base).list_users().await.unwrap_err();

    assert_eq!(err.message, INVALID_RESPONSE);
}
