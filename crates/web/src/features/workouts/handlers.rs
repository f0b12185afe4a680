use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{
        exercise::ExerciseResponse,
        workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse},
    },
    models::Workout,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::exercises;

use super::services;

#[utoipa::path(
    get,
    path = "/workouts/{userId}",
    params(
        ("userId" = String, Path, description = "Owner of the workouts")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all workouts for the user", body = Vec<WorkoutResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    Path(user_id): Path<String>,
) -> Result<Response, WebError> {
    let workouts = services::list_workouts(db.pool(), &user_id).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{userId}/{workoutId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Path((user_id, workout_id)): Path<(String, Uuid)>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), &user_id, workout_id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/workouts/{userId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout")
    ),
    request_body = CreateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Workout already exists")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    // The id and timestamp are server-assigned; both are immutable afterwards.
    let workout = Workout {
        user_id,
        workout_id: Uuid::new_v4(),
        name: req.name,
        exercises: req.exercises.unwrap_or_default(),
        created_at: Utc::now(),
    };

    services::create_workout(db.pool(), &workout).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}

#[utoipa::path(
    put,
    path = "/workouts/{userId}/{workoutId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id")
    ),
    request_body = UpdateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Path((user_id, workout_id)): Path<(String, Uuid)>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    // Full replace under the key taken from the path; the stored created_at
    // is not touched by the update statement, so the placeholder here never
    // reaches the row.
    let workout = Workout {
        user_id,
        workout_id,
        name: req.name,
        exercises: req.exercises.unwrap_or_default(),
        created_at: Utc::now(),
    };

    services::update_workout(db.pool(), &workout).await?;

    // Re-read so the response carries the stored creation timestamp.
    let updated = services::get_workout(db.pool(), &workout.user_id, workout_id).await?;

    Ok(Json(WorkoutResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{userId}/{workoutId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Workout deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Path((user_id, workout_id)): Path<(String, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_workout(db.pool(), &user_id, workout_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{userId}/{workoutId}/exercises",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises embedded in the workout", body = Vec<ExerciseResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn list_workout_exercises(
    State(db): State<Database>,
    Path((user_id, workout_id)): Path<(String, Uuid)>,
) -> Result<Response, WebError> {
    let exercises = services::list_workout_exercises(db.pool(), &user_id, workout_id).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/workouts/{userId}/{workoutId}/exercises/{exerciseId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id"),
        ("exerciseId" = String, Path, description = "Catalog exercise to embed")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise embedded into the workout", body = ExerciseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout or catalog exercise not found")
    ),
    tag = "workouts"
)]
pub async fn add_exercise_to_workout(
    State(db): State<Database>,
    Path((user_id, workout_id, exercise_id)): Path<(String, Uuid, String)>,
) -> Result<Response, WebError> {
    // The route carries only an id; the embedded record is a snapshot of the
    // user's catalog exercise, not a reference to it.
    let exercise = exercises::services::get_exercise(db.pool(), &user_id, &exercise_id).await?;

    let added =
        services::add_exercise_to_workout(db.pool(), &user_id, workout_id, exercise).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(added))).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{userId}/{workoutId}/exercises/{exerciseId}",
    params(
        ("userId" = String, Path, description = "Owner of the workout"),
        ("workoutId" = Uuid, Path, description = "Workout id"),
        ("exerciseId" = String, Path, description = "Embedded exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Exercise removed from the workout"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout or exercise not found")
    ),
    tag = "workouts"
)]
pub async fn remove_exercise_from_workout(
    State(db): State<Database>,
    Path((user_id, workout_id, exercise_id)): Path<(String, Uuid, String)>,
) -> Result<Response, WebError> {
    services::remove_exercise_from_workout(db.pool(), &user_id, workout_id, &exercise_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
