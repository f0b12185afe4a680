use axum::{Router, middleware::from_fn_with_state, routing::get};

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, list_exercises_by_name,
    list_exercises_by_type, update_exercise,
};
use crate::AppState;
use crate::auth::SharedIdentityProvider;
use crate::middleware::auth::require_auth;

pub fn routes(provider: SharedIdentityProvider) -> Router<AppState> {
    // The single-segment routes share one matcher: GET/POST read the segment
    // as the user id, PUT/DELETE as the exercise id (those two routes take
    // the owner from the authenticated identity instead).
    Router::new()
        .route(
            "/:id",
            get(list_exercises)
                .post(create_exercise)
                .put(update_exercise)
                .delete(delete_exercise),
        )
        .route("/:id/:exercise_id", get(get_exercise))
        .route("/:id/name/:exercise_name", get(list_exercises_by_name))
        .route("/:id/type/:exercise_type", get(list_exercises_by_type))
        .route_layer(from_fn_with_state(provider, require_auth))
}
