//! Shared test harness: in-memory database, app state and request helpers
#![allow(dead_code)]

use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use cafe_server::api;
use cafe_server::auth::{JwtConfig, JwtService};
use cafe_server::db;
use cafe_server::state::{AppState, UploadPolicy};
use cafe_server::storage::ImageStorage;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    db::MIGRATOR.run(&pool).await.expect("apply migrations");
    pool
}

pub fn test_jwt() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "integration-test-secret-32-bytes!!".to_string(),
        issuer: "cafe-server-tests".to_string(),
        audience: "cafe-admin-tests".to_string(),
        expiration_minutes: 60,
    })
}

pub async fn test_state() -> AppState {
    AppState {
        pool: test_pool().await,
        jwt: test_jwt(),
        // Never reached by these tests; request validation fails first
        storage: ImageStorage::new(
            "https://example.r2.cloudflarestorage.com",
            "test-bucket",
            "test-key",
            "test-secret",
            "https://cdn.example.test",
            "uploads",
        ),
        uploads: UploadPolicy {
            allowed_extensions: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
                "gif".to_string(),
            ],
            max_size_bytes: 5 * 1024 * 1024,
        },
    }
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (api::router(state.clone()), state)
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    }
}

/// Drive one request through the router and decode the envelope
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(req).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Register a user (optionally with a role) and log them in
pub async fn register_and_login(
    app: &Router,
    username: &str,
    password: &str,
    role: Option<&str>,
) -> String {
    let mut body = serde_json::json!({ "username": username, "password": password });
    if let Some(role) = role {
        body["role"] = serde_json::json!(role);
    }
    let (status, _) = send(app, request("POST", "/api/v1/users", None, Some(body))).await;
    assert_eq!(status, StatusCode::OK, "registration failed");

    let (status, login) = send(
        app,
        request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed");
    login["data"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

pub async fn admin_token(app: &Router) -> String {
    register_and_login(app, "admin", "admin-password", Some("Admin")).await
}

pub async fn user_token(app: &Router) -> String {
    register_and_login(app, "staff", "staff-password", None).await
}
