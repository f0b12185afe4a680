pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

use axum::Router;
use axum::extract::FromRef;
use axum::middleware::from_fn_with_state;
use storage::Database;
use tower_http::trace::TraceLayer;

use auth::SharedIdentityProvider;
use middleware::cors::AllowedOrigins;

/// Shared handles, constructed once at startup and injected by reference
/// into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub provider: SharedIdentityProvider,
    pub origins: AllowedOrigins,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for SharedIdentityProvider {
    fn from_ref(state: &AppState) -> Self {
        state.provider.clone()
    }
}

impl FromRef<AppState> for AllowedOrigins {
    fn from_ref(state: &AppState) -> Self {
        state.origins.clone()
    }
}

/// Assemble the application router. The CORS gate is the outermost layer so
/// preflight requests short-circuit before route dispatch.
pub fn app(state: AppState) -> Router {
    let provider = state.provider.clone();
    let origins = state.origins.clone();

    Router::new()
        .nest("/auth", features::auth::routes())
        .nest("/workouts", features::workouts::routes(provider.clone()))
        .nest("/exercises", features::exercises::routes(provider))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(origins, middleware::cors::cors))
        .with_state(state)
}
