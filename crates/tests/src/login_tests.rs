use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use backend::{MemoryStorage, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    AppErrorKind, Role, User, INVALID_RESPONSE, MISSING_CREDENTIALS, TOKEN_KEY, USER_KEY,
};

use crate::common::{self, Captured, Hits};

/// Backend whose login answers with `reply`, counting calls.
async fn login_backend(
    status: StatusCode,
    reply: Value,
) -> (String, Hits, Captured) {
    let hits = Hits::default();
    let bodies = Captured::default();
    let router = Router::new().route(
        "/api/auth/login",
        post({
            let hits = hits.clone();
            let bodies = bodies.clone();
            move |Json(body): Json<Value>| async move {
                hits.hit();
                bodies.push("/api/auth/login", body);
                (status, Json(reply)).into_response()
            }
        }),
    );
    (common::serve(router).await, hits, bodies)
}

#[tokio::test]
async fn blank_fields_never_reach_the_server() {
    let (base, hits, _) = login_backend(StatusCode::OK, json!({})).await;
    let api = common::client(&base);

    for (username, password) in [("", ""), ("manager1", ""), ("", "password"), ("   ", "password")] {
        let err = api.login(username, password).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, MISSING_CREDENTIALS);
    }
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn successful_login_persists_token_and_user() {
    let (base, hits, bodies) = login_backend(
        StatusCode::OK,
        json!({ "user": common::manager_json(), "token": "token-123", "message": "Login successful" }),
    )
    .await;
    let api = common::client(&base);
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());

    let response = api.login("manager1", "password").await.unwrap();
    let session = store.establish(response).await.unwrap();

    assert_eq!(hits.count(), 1);
    assert_eq!(
        bodies.all()[0].1,
        json!({ "username": "manager1", "password": "password" })
    );
    assert_eq!(session.user.role, Role::Manager);
    assert_eq!(storage.peek(TOKEN_KEY).as_deref(), Some("token-123"));

    let stored: User = serde_json::from_str(&storage.peek(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored, session.user);
    assert_eq!(store.load().await, Some(session));
}

#[tokio::test]
async fn rejected_credentials_show_server_message_and_store_nothing() {
    let (base, hits, _) = login_backend(
        StatusCode::UNAUTHORIZED,
        json!({ "error": "Invalid credentials" }),
    )
    .await;
    let api = common::client(&base);
    let storage = MemoryStorage::new();

    let err = api.login("manager1", "wrong").await.unwrap_err();

    assert_eq!(hits.count(), 1);
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(storage.peek(TOKEN_KEY), None);
}

#[tokio::test]
async fn rejection_without_body_falls_back_to_generic_message() {
    let (base, _, _) = login_backend(StatusCode::UNAUTHORIZED, Value::Null).await;
    let err = common::client(&base)
        .login("manager1", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.message, "Authentication failed");
}

#[tokio::test]
async fn response_without_token_is_invalid() {
    let (base, _, _) = login_backend(StatusCode::OK, json!({ "user": common::manager_json() })).await;
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());

    let response = common::client(&base)
        .login("manager1", "password")
        .await
        .unwrap();
    let err = store.establish(response).await.unwrap_err();

    assert_eq!(err.message, INVALID_RESPONSE);
    assert_eq!(storage.peek(TOKEN_KEY), None);
    assert_eq!(storage.peek(USER_KEY), None);
}
