//! Integration tests for the CORS gate. The allow-list configured by the
//! test harness is `http://localhost:5173,*.example.com`.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::header::ORIGIN;
use axum::http::{Method, Request, Response, StatusCode};
use common::{body_bytes, build_test_app};
use sqlx::PgPool;
use tower::ServiceExt;

async fn send(app: Router, method: Method, uri: &str, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(ORIGIN, origin)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

fn allow_origin(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("access-control-allow-origin")
        .map(|value| value.to_str().unwrap())
}

// ---------------------------------------------------------------------------
// Test: preflight short-circuits with 204 and no body
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn preflight_returns_204_with_echoed_origin(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send(
        app,
        Method::OPTIONS,
        "/workouts/u1",
        "http://localhost:5173",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(allow_origin(&response), Some("http://localhost:5173"));
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-methods")
            .unwrap(),
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert!(body_bytes(response).await.is_empty());
}

// Preflights carry no Authorization header; the gate must not see them.
#[sqlx::test(migrations = "../storage/migrations")]
async fn preflight_bypasses_the_authentication_gate(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send(
        app,
        Method::OPTIONS,
        "/workouts/u1/some-id/exercises/other-id",
        "http://localhost:5173",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: allow-list matching
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn wildcard_subdomain_origin_is_echoed(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send(
        app,
        Method::OPTIONS,
        "/workouts/u1",
        "https://app.example.com",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(allow_origin(&response), Some("https://app.example.com"));
}

#[sqlx::test(migrations = "../storage/migrations")]
async fn disallowed_origin_gets_no_allow_origin_header(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send(app, Method::OPTIONS, "/workouts/u1", "https://evil.com").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(allow_origin(&response), None);
}

// ---------------------------------------------------------------------------
// Test: non-preflight responses carry the headers too
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../storage/migrations")]
async fn regular_response_carries_cors_headers(pool: PgPool) {
    let app = build_test_app(pool);

    // 401 from the auth gate, but the CORS headers are applied on the way out.
    let response = send(app, Method::GET, "/workouts/u1", "https://app.example.com").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(allow_origin(&response), Some("https://app.example.com"));
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .unwrap(),
        "true"
    );
}
