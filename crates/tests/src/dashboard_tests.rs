use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use backend::{load_admin_data, load_department_queue, MISSING_DEPARTMENT};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;
use tokio::sync::Barrier;

use crate::common::{self, Hits};

fn pending_router(hits: Hits) -> Router {
    Router::new().route(
        "/api/workflows/pending/{department}",
        get(move || async move {
            hits.hit();
            Json(json!([common::workflow_json("5", "PENDING")]))
        }),
    )
}

#[tokio::test]
async fn manager_without_department_makes_no_request() {
    let hits = Hits::default();
    let base = common::serve(pending_router(hits.clone())).await;
    let api = common::client(&base);

    for department in [None, Some(String::new()), Some("   ".to_string())] {
        let err = load_department_queue(&api, department).await.unwrap_err();
        assert_eq!(err.message, MISSING_DEPARTMENT);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn manager_queue_is_loaded_for_department() {
    let hits = Hits::default();
    let base = common::serve(pending_router(hits.clone())).await;

    let queue = load_department_queue(&common::client(&base), Some("Finance".into()))
        .await
        .unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(hits.count(), 1);
}

/// Each handler waits until all three requests are in flight.
#[tokio::test]
async fn admin_requests_run_concurrently() {
    let barrier = Arc::new(Barrier::new(3));
    let wait = |barrier: Arc<Barrier>, body: serde_json::Value| {
        get(move || async move {
            barrier.wait().await;
            Json(body)
        })
    };
    let router = Router::new()
        .route(
            "/api/users",
            wait(barrier.clone(), json!([common::manager_json()])),
        )
        .route(
            "/api/workflows",
            wait(
                barrier.clone(),
                json!([
                    common::workflow_json("1", "PENDING"),
                    common::workflow_json("2", "APPROVED")
                ]),
            ),
        )
        .route(
            "/api/workflows/analytics",
            wait(
                barrier.clone(),
                json!({
                    "summary": {
                        "totalWorkflows": 2,
                        "pendingWorkflows": 1,
                        "approvedWorkflows": 1,
                        "rejectedWorkflows": 0,
                        "approvalRate": 50.0
                    },
                    "source": "database"
                }),
            ),
        );
    let base = common::serve(router).await;
    let api = common::client(&base);

    let data = tokio::time::timeout(Duration::from_secs(5), load_admin_data(&api))
        .await
        .expect("admin requests were issued one at a time")
        .unwrap();

    assert_eq!(data.users.len(), 1);
    assert_eq!(data.workflows.len(), 2);
    assert_eq!(data.analytics.summary.total_workflows, 2);
}

#[tokio::test]
async fn admin_load_fails_when_any_request_fails() {
    let router = Router::new()
        .route(
            "/api/users",
            get(|| async { common::error_body(StatusCode::FORBIDDEN, "Admins only") }),
        )
        .route("/api/workflows", get(|| async { Json(json!([])) }))
        .route(
            "/api/workflows/analytics",
            get(|| async { Json(json!({ "summary": {} })) }),
        );
    let base = common::serve(router).await;

    let err = load_admin_data(&common::client(&base)).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Admins only");
}
