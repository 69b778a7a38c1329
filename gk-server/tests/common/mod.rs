#![allow(dead_code)]

//! Test infrastructure for gk-server API tests

use gk_config::AuthConfig;
use gk_server::AppState;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/gk-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    let auth = AuthConfig {
        access_secret: "access-secret-for-tests-at-least-32b".to_string(),
        refresh_secret: "refresh-secret-for-tests-at-least-32".to_string(),
        bcrypt_cost: 4, // Minimum work factor keeps tests fast
        ..AuthConfig::default()
    };

    AppState::new(pool, &auth)
}

/// POST a JSON body and return (status, parsed body)
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (axum::http::StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// GET with an optional bearer token and return (status, parsed body)
pub async fn get_with_token(
    app: axum::Router,
    uri: &str,
    token: Option<&str>,
) -> (axum::http::StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Register a user and return the auth response body
pub async fn register_user(app: axum::Router, email: &str, password: &str) -> serde_json::Value {
    let (status, body) = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::CREATED);
    body
}
