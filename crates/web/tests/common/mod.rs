//! Shared harness for the HTTP integration tests: builds the real router
//! around a stub identity provider so no network round trips happen.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use storage::Database;
use web::AppState;
use web::auth::{AuthError, IdentityProvider, SharedIdentityProvider, TokenSet, VerifiedUser};
use web::middleware::cors::AllowedOrigins;

/// The token the stub provider vouches for, and the identity it maps to.
pub const TEST_TOKEN: &str = "valid-token";
pub const TEST_USER: &str = "u1";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TEST_REFRESH_TOKEN: &str = "refresh-abc";

/// In-process stand-in for the managed identity provider.
pub struct StubProvider;

#[async_trait::async_trait]
impl IdentityProvider for StubProvider {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        if email == "taken@example.com" {
            Err(AuthError::Rejected("user already exists".to_string()))
        } else {
            Ok(())
        }
    }

    async fn confirm_sign_up(&self, _email: &str, code: &str) -> Result<(), AuthError> {
        if code == "123456" {
            Ok(())
        } else {
            Err(AuthError::Rejected("invalid confirmation code".to_string()))
        }
    }

    async fn sign_in(&self, _email: &str, password: &str) -> Result<TokenSet, AuthError> {
        if password == TEST_PASSWORD {
            Ok(TokenSet {
                access_token: TEST_TOKEN.to_string(),
                refresh_token: Some(TEST_REFRESH_TOKEN.to_string()),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenSet, AuthError> {
        if refresh_token == TEST_REFRESH_TOKEN {
            Ok(TokenSet {
                access_token: TEST_TOKEN.to_string(),
                refresh_token: None,
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    async fn verify_token(&self, access_token: &str) -> Result<VerifiedUser, AuthError> {
        if access_token == TEST_TOKEN {
            Ok(VerifiedUser {
                sub: TEST_USER.to_string(),
                email: Some("u1@example.com".to_string()),
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

/// Build the full application router around the given pool, mirroring the
/// construction in `main.rs`. The CORS allow-list includes a wildcard
/// pattern so the subdomain matching is exercised end to end.
pub fn build_test_app(pool: PgPool) -> Router {
    let provider: SharedIdentityProvider = Arc::new(StubProvider);

    let state = AppState {
        db: Database::from_pool(pool),
        provider,
        origins: AllowedOrigins::from_comma_separated("http://localhost:5173,*.example.com"),
    };

    web::app(state)
}

/// Send a request with a valid bearer token and an optional JSON body.
pub async fn authed(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"));

    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    authed(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    authed(app, Method::POST, uri, Some(body)).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    authed(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    authed(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    authed(app, Method::DELETE, uri, None).await
}

/// Send a request without any Authorization header.
pub async fn anonymous(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
