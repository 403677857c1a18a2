#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use jsonwebtoken::{encode, EncodingKey, Header};
use projecthub_api::auth::session::{SessionClaims, SessionConfig};
use projecthub_api::config::{ServerConfig, StoreBackend};
use projecthub_api::router::build_app_router;
use projecthub_api::state::AppState;
use projecthub_db::store::InMemoryProjectStore;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Lifetime of tokens minted for tests, in seconds.
pub const TOKEN_TTL_SECS: i64 = 15 * 60;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        restrict_project_edits: false,
        session: SessionConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store handle is returned so tests can inspect its contents or take
/// it offline.
pub fn build_test_app() -> (Router, Arc<InMemoryProjectStore>) {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> (Router, Arc<InMemoryProjectStore>) {
    let store = Arc::new(InMemoryProjectStore::new());
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), store)
}

/// Mint a valid session token for `name` with no role claim (member).
pub fn token_for(name: &str) -> String {
    token_with_role(name, None)
}

pub fn token_with_role(name: &str, role: Option<&str>) -> String {
    sign_session(name, role, TEST_SECRET, TOKEN_TTL_SECS)
}

/// Sign a session token the way the identity provider does.
pub fn sign_session(name: &str, role: Option<&str>, secret: &str, expires_in_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: format!("id-{}", name.trim()),
        email: Some(format!("{}@example.com", name.trim())),
        name: name.to_string(),
        role: role.map(str::to_string),
        exp: now + expires_in_secs,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token should encode")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Create a project as `token`'s user and return the response JSON.
pub async fn create_project(app: Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/v1/projects", body, token).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
