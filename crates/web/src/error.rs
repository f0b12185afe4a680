use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

use crate::auth::AuthError;

/// Web layer errors. `IntoResponse` below is the single place where error
/// kinds are mapped to HTTP statuses and the uniform `{"error": ...}` body.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Auth(AuthError),
    BadRequest(String),
    Unauthorized(&'static str),
    WorkoutNotFound,
    ExerciseNotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Auth(e) => write!(f, "Auth error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::WorkoutNotFound => write!(f, "Workout not found"),
            Self::ExerciseNotFound => write!(f, "Exercise not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::AlreadyExists) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::Rejected(_)) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::InvalidCredentials | AuthError::InvalidToken) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Auth(AuthError::Transport(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::WorkoutNotFound | Self::ExerciseNotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::AlreadyExists) => {
                json!({
                    "error": "Resource already exists"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::Auth(AuthError::Rejected(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Auth(AuthError::InvalidCredentials) => {
                json!({
                    "error": "Invalid credentials"
                })
            }
            Self::Auth(AuthError::InvalidToken) => {
                json!({
                    "error": "Invalid or expired token"
                })
            }
            Self::Auth(AuthError::Transport(e)) => {
                tracing::error!("Identity provider request failed: {}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::WorkoutNotFound => {
                json!({
                    "error": "workout not found"
                })
            }
            Self::ExerciseNotFound => {
                json!({
                    "error": "exercise not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<AuthError> for WebError {
    fn from(error: AuthError) -> Self {
        Self::Auth(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
