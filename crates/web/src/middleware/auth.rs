use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::SharedIdentityProvider;
use crate::error::WebError;

/// Authentication gate for protected routes. Every request carries its
/// token to the identity provider for verification — nothing is cached or
/// verified locally. The verified identity is attached to the request as
/// an extension for handlers that need it.
pub async fn require_auth(
    State(provider): State<SharedIdentityProvider>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header) = header else {
        return Err(WebError::Unauthorized("Authorization header required"));
    };

    let Some(token) = parse_bearer(header) else {
        return Err(WebError::Unauthorized("Invalid authorization format"));
    };

    match provider.verify_token(token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            Err(WebError::Unauthorized("Invalid or expired token"))
        }
    }
}

/// Accepts exactly `Bearer <token>`.
fn parse_bearer(header: &str) -> Option<&str> {
    match header.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}
