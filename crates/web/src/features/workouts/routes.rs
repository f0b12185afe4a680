use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use super::handlers::{
    add_exercise_to_workout, create_workout, delete_workout, get_workout, list_workout_exercises,
    list_workouts, remove_exercise_from_workout, update_workout,
};
use crate::AppState;
use crate::auth::SharedIdentityProvider;
use crate::middleware::auth::require_auth;

pub fn routes(provider: SharedIdentityProvider) -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(list_workouts).post(create_workout))
        .route(
            "/:user_id/:workout_id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route(
            "/:user_id/:workout_id/exercises",
            get(list_workout_exercises),
        )
        .route(
            "/:user_id/:workout_id/exercises/:exercise_id",
            post(add_exercise_to_workout).delete(remove_exercise_from_workout),
        )
        .route_layer(from_fn_with_state(provider, require_auth))
}
