use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use backend::analytics::{AI_SERVICE_NOTICE, DEMO_NOTICE};
use backend::{load_analytics, AnalyticsSource};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::AnalyticsReport;

use crate::common::{self, Hits};

fn report(total: u64, source: &str) -> Value {
    json!({
        "summary": {
            "totalWorkflows": total,
            "pendingWorkflows": 2,
            "approvedWorkflows": 5,
            "rejectedWorkflows": 1,
            "approvalRate": 62.5
        },
        "source": source
    })
}

/// Backend and AI service on one mock; `None` makes that endpoint fail with 500.
async fn analytics_backend(
    backend: Option<Value>,
    ai_service: Option<Value>,
) -> (String, Hits, Hits) {
    let backend_hits = Hits::default();
    let ai_hits = Hits::default();

    let answer = |hits: Hits, body: Option<Value>| {
        get(move || async move {
            hits.hit();
            match body {
                Some(body) => Json(body).into_response(),
                None => common::error_body(StatusCode::INTERNAL_SERVER_ERROR, "Service down")
                    .into_response(),
            }
        })
    };

    let router = Router::new()
        .route(
            "/api/workflows/analytics",
            answer(backend_hits.clone(), backend),
        )
        .route("/ai/api/analytics", answer(ai_hits.clone(), ai_service));
    (common::serve(router).await, backend_hits, ai_hits)
}

#[tokio::test]
async fn backend_report_is_used_when_available() {
    let (base, backend_hits, ai_hits) =
        analytics_backend(Some(report(8, "database")), Some(report(99, "ai"))).await;

    let load = load_analytics(&common::client(&base)).await;

    assert_eq!(load.source, AnalyticsSource::Backend);
    assert_eq!(load.notice, None);
    assert_eq!(load.report.summary.total_workflows, 8);
    assert_eq!(backend_hits.count(), 1);
    assert_eq!(ai_hits.count(), 0);
}

#[tokio::test]
async fn ai_service_is_tried_once_when_backend_fails() {
    let (base, backend_hits, ai_hits) = analytics_backend(None, Some(report(99, "ai"))).await;

    let load = load_analytics(&common::client(&base)).await;

    assert_eq!(load.source, AnalyticsSource::AiService);
    assert_eq!(load.notice, Some(AI_SERVICE_NOTICE));
    assert_eq!(load.report.summary.total_workflows, 99);
    assert_eq!((backend_hits.count(), ai_hits.count()), (1, 1));
}

#[tokio::test]
async fn demo_data_is_shown_when_both_services_fail() {
    let (base, backend_hits, ai_hits) = analytics_backend(None, None).await;

    let load = load_analytics(&common::client(&base)).await;

    assert_eq!(load.source, AnalyticsSource::Demo);
    assert_eq!(load.notice, Some(DEMO_NOTICE));
    assert_eq!(load.report, AnalyticsReport::demo());
    assert_eq!((backend_hits.count(), ai_hits.count()), (1, 1));
}

#[tokio::test]
async fn demo_data_is_shown_when_nothing_listens() {
    let base = common::dead_base_url().await;

    let load = load_analytics(&common::client(&base)).await;

    assert_eq!(load.source, AnalyticsSource::Demo);
    assert_eq!(load.report.summary.total_workflows, 156);
}
