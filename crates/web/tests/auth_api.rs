//! Integration tests for the `/auth` endpoints and the authentication gate.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Method, Request, StatusCode};
use common::{TEST_PASSWORD, TEST_REFRESH_TOKEN, anonymous, body_json, build_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: sign-up and confirmation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn signup_returns_201_with_confirmation_message(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app,
        Method::POST,
        "/auth/signup",
        Some(json!({"email": "new@example.com", "password": "long-enough"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("verification"));
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn signup_with_short_password_returns_400(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app,
        Method::POST,
        "/auth/signup",
        Some(json!({"email": "new@example.com", "password": "short"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn signup_rejected_by_provider_returns_400_with_message(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app,
        Method::POST,
        "/auth/signup",
        Some(json!({"email": "taken@example.com", "password": "long-enough"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "user already exists");
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn confirm_signup_round_trip(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app.clone(),
        Method::POST,
        "/auth/confirm",
        Some(json!({"email": "new@example.com", "code": "123456"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Email confirmed successfully"
    );

    let response = anonymous(
        app,
        Method::POST,
        "/auth/confirm",
        Some(json!({"email": "new@example.com", "code": "000000"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: sign-in and refresh token shapes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn signin_returns_the_provider_token_set(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app,
        Method::POST,
        "/auth/signin",
        Some(json!({"email": "u1@example.com", "password": TEST_PASSWORD})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn signin_with_wrong_password_returns_401(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app,
        Method::POST,
        "/auth/signin",
        Some(json!({"email": "u1@example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn refresh_omits_refresh_token_in_response(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(
        app.clone(),
        Method::POST,
        "/auth/refresh",
        Some(json!({"refresh_token": TEST_REFRESH_TOKEN})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["access_token"].is_string());
    assert!(body.get("refresh_token").is_none());

    let response = anonymous(
        app,
        Method::POST,
        "/auth/refresh",
        Some(json!({"refresh_token": "bogus"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: authentication gate state machine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn protected_route_without_header_returns_401(pool: PgPool) {
    let app = build_test_app(pool);

    let response = anonymous(app, Method::GET, "/workouts/u1", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Authorization header required"
    );
}

async fn with_auth_header(app: Router, header: &str) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/workouts/u1")
        .header(AUTHORIZATION, header)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn malformed_authorization_header_returns_401(pool: PgPool) {
    let app = build_test_app(pool);

    for header in ["valid-token", "Basic valid-token", "Bearer a b"] {
        let response = with_auth_header(app.clone(), header).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "Invalid authorization format"
        );
    }
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn unknown_token_returns_401(pool: PgPool) {
    let app = build_test_app(pool);

    let response = with_auth_header(app, "Bearer not-the-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Invalid or expired token"
    );
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn auth_routes_do_not_require_a_token(pool: PgPool) {
    let app = build_test_app(pool);

    // No Authorization header at all; anything but 401 proves the gate is
    // not layered over /auth.
    let response = anonymous(
        app,
        Method::POST,
        "/auth/signin",
        Some(json!({"email": "u1@example.com", "password": TEST_PASSWORD})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
