use axum::{
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, RegisterRequest, Role};

use crate::common::{self, Captured, Hits};

#[tokio::test]
async fn users_list_accepts_numeric_ids() {
    let router = Router::new().route(
        "/api/users",
        get(|| async {
            Json(json!([
                { "id": 1, "username": "admin", "email": "admin@company.com", "role": "ADMIN", "department": "IT" },
                common::manager_json()
            ]))
        }),
    );
    let base = common::serve(router).await;

    let users = common::client(&base).list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "1");
    assert_eq!(users[0].role, Role::Admin);
    assert_eq!(users[1].department, "Finance");
}

#[tokio::test]
async fn register_posts_the_form() {
    let bodies = Captured::default();
    let router = Router::new().route(
        "/api/auth/register",
        post({
            let bodies = bodies.clone();
            move |Json(body): Json<Value>| async move {
                bodies.push("/api/auth/register", body);
                (StatusCode::CREATED, Json(json!({ "message": "User created" })))
            }
        }),
    );
    let base = common::serve(router).await;

    let form = RegisterRequest {
        username: "carol".into(),
        email: "carol@company.com".into(),
        password: "secret".into(),
        role: Role::Manager,
        department: "Sales".into(),
    };
    common::client(&base).register(&form).await.unwrap();

    assert_eq!(
        bodies.all()[0].1,
        json!({
            "username": "carol",
            "email": "carol@company.com",
            "password": "secret",
            "role": "MANAGER",
            "department": "Sales"
        })
    );
}

#[tokio::test]
async fn register_validates_locally() {
    let hits = Hits::default();
    let router = Router::new().route(
        "/api/auth/register",
        post({
            let hits = hits.clone();
            move || async move {
                hits.hit();
                StatusCode::CREATED
            }
        }),
    );
    let base = common::serve(router).await;

    let form = RegisterRequest {
        username: "al".into(),
        email: "not-an-email".into(),
        password: "secret".into(),
        ..RegisterRequest::default()
    };
    let err = common::client(&base).register(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("username"));
    assert!(err.field_errors.contains_key("email"));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn duplicate_username_surfaces_server_error() {
    let router = Router::new().route(
        "/api/auth/register",
        post(|| async { common::error_body(StatusCode::CONFLICT, "Username already exists") }),
    );
    let base = common::serve(router).await;

    let form = RegisterRequest {
        username: "admin".into(),
        email: "admin@company.com".into(),
        password: "secret".into(),
        ..RegisterRequest::default()
    };
    let err = common::client(&base).register(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Username already exists");
}

#[tokio::test]
async fn delete_targets_the_user_id() {
    let seen = Captured::default();
    let router = Router::new().route(
        "/api/users/{id}",
        delete({
            let seen = seen.clone();
            move |Path(id): Path<String>| async move {
                seen.push(id, Value::Null);
                StatusCode::NO_CONTENT
            }
        }),
    );
    let base = common::serve(router).await;

    common::client(&base).delete_user("b7e2").await.unwrap();

    assert_eq!(seen.all()[0].0, "b7e2");
}
