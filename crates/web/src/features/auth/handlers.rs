use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::{SharedIdentityProvider, TokenSet};
use crate::error::WebError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    #[serde(default)]
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "password must be at least 8 characters long"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfirmSignUpRequest {
    #[serde(default)]
    #[validate(email(message = "invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created, confirmation pending"),
        (status = 400, description = "Invalid input or provider rejection")
    ),
    tag = "auth"
)]
pub async fn sign_up(
    State(provider): State<SharedIdentityProvider>,
    Json(req): Json<SignUpRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    provider.sign_up(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully. Please check your email for verification."
        })),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/auth/confirm",
    request_body = ConfirmSignUpRequest,
    responses(
        (status = 200, description = "Email confirmed"),
        (status = 400, description = "Invalid input or provider rejection")
    ),
    tag = "auth"
)]
pub async fn confirm_sign_up(
    State(provider): State<SharedIdentityProvider>,
    Json(req): Json<ConfirmSignUpRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    provider.confirm_sign_up(&req.email, &req.code).await?;

    Ok(Json(json!({ "message": "Email confirmed successfully" })).into_response())
}

#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenSet),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn sign_in(
    State(provider): State<SharedIdentityProvider>,
    Json(req): Json<SignInRequest>,
) -> Result<Response, WebError> {
    let tokens = provider.sign_in(&req.email, &req.password).await?;

    Ok(Json(tokens).into_response())
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed", body = TokenSet),
        (status = 401, description = "Invalid refresh token")
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    State(provider): State<SharedIdentityProvider>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Response, WebError> {
    let tokens = provider.refresh(&req.refresh_token).await?;

    Ok(Json(tokens).into_response())
}
