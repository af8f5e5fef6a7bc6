//! Shared helpers for HTTP-level integration tests: app construction,
//! request plumbing, and database seeding.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use parkhub_api::auth::jwt::{generate_access_token, JwtConfig};
use parkhub_api::auth::password::hash_password;
use parkhub_api::config::ServerConfig;
use parkhub_api::router::build_app_router;
use parkhub_api::state::AppState;
use parkhub_db::models::user::{CreateUser, User};
use parkhub_db::repositories::UserRepo;

/// Plaintext password used by every seeded test user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with a fixed JWT secret and safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with the production middleware stack,
/// backed by the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Create a user directly in the database with [`TEST_PASSWORD`].
///
/// `role` is `Some("admin")` for admins, `None` for regular users.
pub async fn create_test_user(pool: &PgPool, email: &str, role: Option<&str>) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            full_name: "Test User".to_string(),
            address: "1 Test Street".to_string(),
            pincode: "560001".to_string(),
            role: role.map(str::to_string),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Mint an access token for a seeded user, signed with the test secret.
pub fn mint_token(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed an admin and return a bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let admin = create_test_user(pool, "admin@test.com", Some("admin")).await;
    mint_token(&admin)
}

/// Seed a regular user and return it together with a bearer token.
pub async fn user_with_token(pool: &PgPool, email: &str) -> (User, String) {
    let user = create_test_user(pool, email, None).await;
    let token = mint_token(&user);
    (user, token)
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

/// POST with an empty body, e.g. for release endpoints.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a response status and that the error envelope carries the given
/// machine-readable code.
pub async fn assert_error_code(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error code: {json}");
    assert!(json["error"].is_string(), "error message must be a string");
}

/// Create a lot through the admin API and return its id.
pub async fn create_lot_via_api(
    pool: &PgPool,
    admin_token: &str,
    location: &str,
    price: i64,
    total_spots: i32,
) -> i64 {
    let body = serde_json::json!({
        "prime_location": location,
        "price": price,
        "address": format!("{location} Road"),
        "pincode": "560001",
        "total_spots": total_spots,
    });
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/admin/lots", body, admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_i64().expect("lot id")
}
