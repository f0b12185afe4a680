use axum::{Router, routing::post};

use super::handlers::{confirm_sign_up, refresh_token, sign_in, sign_up};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/confirm", post(confirm_sign_up))
        .route("/signin", post(sign_in))
        .route("/refresh", post(refresh_token))
}
