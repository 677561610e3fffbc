use axum::{
    extract::Path,
    routing::{get, post, put},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, Decision, NewWorkflow, WorkflowStatus, WorkflowType,
};

use crate::common::{self, Captured, Hits};

#[tokio::test]
async fn user_workflows_are_fetched_by_username() {
    let seen = Captured::default();
    let router = Router::new().route(
        "/api/workflows/user/{username}",
        get({
            let seen = seen.clone();
            move |Path(username): Path<String>| async move {
                seen.push(username, Value::Null);
                Json(json!([
                    common::workflow_json("1", "PENDING"),
                    common::workflow_json("2", "APPROVED"),
                    common::workflow_json("3", "REJECTED")
                ]))
            }
        }),
    );
    let base = common::serve(router).await;

    let list = common::client(&base)
        .list_user_workflows("alice")
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    let statuses: Vec<_> = list.iter().map(|wf| wf.status).collect();
    assert_eq!(
        statuses,
        vec![
            WorkflowStatus::Pending,
            WorkflowStatus::Approved,
            WorkflowStatus::Rejected
        ]
    );
    assert_eq!(seen.all()[0].0, "alice");
}

#[tokio::test]
async fn pending_department_is_path_encoded() {
    let seen = Captured::default();
    let router = Router::new().route(
        "/api/workflows/pending/{department}",
        get({
            let seen = seen.clone();
            move |Path(department): Path<String>| async move {
                seen.push(department, Value::Null);
                Json(json!([common::workflow_json("9", "PENDING")]))
            }
        }),
    );
    let base = common::serve(router).await;

    let list = common::client(&base)
        .list_pending_workflows("Human Resources")
        .await
        .unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(seen.all()[0].0, "Human Resources");
}

#[tokio::test]
async fn create_posts_wire_shape() {
    let bodies = Captured::default();
    let router = Router::new().route(
        "/api/workflows/{username}",
        post({
            let bodies = bodies.clone();
            move |Path(username): Path<String>, Json(body): Json<Value>| async move {
                bodies.push(username, body);
                Json(common::workflow_json("42", "PENDING"))
            }
        }),
    );
    let base = common::serve(router).await;

    let form = NewWorkflow::from_form("Laptop", "Replacement", WorkflowType::Purchase, "").unwrap();
    let created = common::client(&base)
        .create_workflow("alice", &form)
        .await
        .unwrap();

    assert_eq!(created.id, "42");
    assert_eq!(
        bodies.all(),
        vec![(
            "alice".to_string(),
            json!({
                "title": "Laptop",
                "description": "Replacement",
                "type": "PURCHASE",
                "amount": 0.0
            })
        )]
    );
}

#[tokio::test]
async fn invalid_workflow_is_rejected_before_sending() {
    let hits = Hits::default();
    let router = Router::new().route(
        "/api/workflows/{username}",
        post({
            let hits = hits.clone();
            move || async move {
                hits.hit();
                Json(common::workflow_json("1", "PENDING"))
            }
        }),
    );
    let base = common::serve(router).await;

    let form = NewWorkflow::from_form("", "desc", WorkflowType::Leave, "").unwrap();
    let err = common::client(&base)
        .create_workflow("alice", &form)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn status_update_sends_decision_and_manager() {
    let bodies = Captured::default();
    let router = Router::new().route(
        "/api/workflows/{id}/status",
        put({
            let bodies = bodies.clone();
            move |Path(id): Path<String>, Json(body): Json<Value>| async move {
                let status = body["status"].as_str().unwrap_or("PENDING").to_string();
                bodies.push(id.clone(), body);
                Json(common::workflow_json(&id, &status))
            }
        }),
    );
    let base = common::serve(router).await;
    let api = common::client(&base);

    let approved = api
        .update_workflow_status("7", Decision::Approve, "manager1")
        .await
        .unwrap();
    let rejected = api
        .update_workflow_status("8", Decision::Reject, "manager1")
        .await
        .unwrap();

    assert_eq!(approved.status, WorkflowStatus::Approved);
    assert_eq!(rejected.status, WorkflowStatus::Rejected);
    assert_eq!(
        bodies.all(),
        vec![
            (
                "7".to_string(),
                json!({ "status": "APPROVED", "managerUsername": "manager1" })
            ),
            (
                "8".to_string(),
                json!({ "status": "REJECTED", "managerUsername": "manager1" })
            ),
        ]
    );
}

#[tokio::test]
async fn approval_prediction_parses_model_output() {
    let router = Router::new().route(
        "/api/workflows/{id}/ai-prediction",
        get(|| async {
            Json(json!({
                "approvalProbability": 0.72,
                "suggestion": "APPROVE",
                "confidence": 0.8,
                "fallback": false
            }))
        }),
    );
    let base = common::serve(router).await;

    let prediction = common::client(&base)
        .approval_prediction("7")
        .await
        .unwrap();

    assert_eq!(prediction.percent(), 72);
    assert!(!prediction.fallback);
}
