//! Shared helpers for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use api::{
    AppState,
    database::init_schema,
    ids::{IdGenerator, SharedIdGenerator, UuidGenerator},
    routes::create_router,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use common::database::init_memory_pool;
use serde_json::{Value, json};
use tower::util::ServiceExt;

/// Deterministic id generator handing out `prefix-1`, `prefix-2`, ...
pub struct SequentialIds {
    prefix: &'static str,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

/// Build a fresh application state over an in-memory store
pub async fn test_state() -> AppState {
    test_state_with_ids(Arc::new(UuidGenerator)).await
}

/// Build a fresh application state with an injected id generator
pub async fn test_state_with_ids(ids: SharedIdGenerator) -> AppState {
    let pool = init_memory_pool().await.expect("memory pool");
    init_schema(&pool).await.expect("schema init");
    AppState::new(pool, ids)
}

/// Build a fresh router over an in-memory store
pub async fn test_app() -> Router {
    create_router(test_state().await)
}

/// Send a JSON request, returning the status and the parsed body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, body)
}

/// Send a request with a raw Authorization header value
pub async fn send_with_header(app: &Router, method: &str, uri: &str, auth: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, body)
}

/// Register a user over HTTP and return their ID
///
/// Every helper-registered user gets `<username>@example.com` and the
/// password `secret123`, which `login_user` relies on.
pub async fn register_user(app: &Router, name: &str, username: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/usuarios",
        None,
        Some(json!({
            "name": name,
            "email": format!("{}@example.com", username),
            "username": username,
            "password": "secret123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().expect("user id").to_string()
}

/// Log a helper-registered user in and return the issued token
pub async fn login_user(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({
            "email": format!("{}@example.com", username),
            "password": "secret123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().expect("token").to_string()
}

/// Insert a user row directly, bypassing password hashing
pub async fn insert_user(state: &AppState, id: &str, name: &str, username: &str) {
    sqlx::query(
        "INSERT INTO users (id, name, email, username, password_hash, created_at) \
         VALUES (?, ?, ?, ?, 'x', ?)",
    )
    .bind(id)
    .bind(name)
    .bind(format!("{}@example.com", username))
    .bind(username)
    .bind(Utc::now())
    .execute(&state.db_pool)
    .await
    .expect("insert user");
}
