use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest},
    models::Exercise,
};
use validator::Validate;

use crate::auth::VerifiedUser;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/exercises/{userId}",
    params(
        ("userId" = String, Path, description = "Owner of the exercises")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all catalog exercises for the user", body = Vec<ExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    Path(user_id): Path<String>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(db.pool(), &user_id).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{userId}/{exerciseId}",
    params(
        ("userId" = String, Path, description = "Owner of the exercise"),
        ("exerciseId" = String, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise found", body = ExerciseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    Path((user_id, exercise_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.pool(), &user_id, &exercise_id).await?;

    Ok(Json(ExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{userId}/name/{exerciseName}",
    params(
        ("userId" = String, Path, description = "Owner of the exercises"),
        ("exerciseName" = String, Path, description = "Exercise name to match")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises with the given name", body = Vec<ExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn list_exercises_by_name(
    State(db): State<Database>,
    Path((user_id, exercise_name)): Path<(String, String)>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises_by_name(db.pool(), &user_id, &exercise_name).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{userId}/type/{exerciseType}",
    params(
        ("userId" = String, Path, description = "Owner of the exercises"),
        ("exerciseType" = String, Path, description = "Exercise type to match")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises of the given type", body = Vec<ExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn list_exercises_by_type(
    State(db): State<Database>,
    Path((user_id, exercise_type)): Path<(String, String)>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises_by_type(db.pool(), &user_id, &exercise_type).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/exercises/{userId}",
    params(
        ("userId" = String, Path, description = "Owner of the exercise")
    ),
    request_body = CreateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise created successfully", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Exercise already exists")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = Exercise::from(req);
    services::create_exercise(db.pool(), &user_id, &exercise).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(exercise))).into_response())
}

// The update/delete routes carry no user in the path; the owner half of the
// composite key is the identity the auth gate verified with the provider.
#[utoipa::path(
    put,
    path = "/exercises/{exerciseId}",
    params(
        ("exerciseId" = String, Path, description = "Exercise id")
    ),
    request_body = UpdateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise updated successfully", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    Path(exercise_id): Path<String>,
    Extension(user): Extension<VerifiedUser>,
    Json(req): Json<UpdateExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = req.into_exercise(exercise_id);
    services::update_exercise(db.pool(), &user.sub, &exercise).await?;

    Ok(Json(ExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    delete,
    path = "/exercises/{exerciseId}",
    params(
        ("exerciseId" = String, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Exercise deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    Path(exercise_id): Path<String>,
    Extension(user): Extension<VerifiedUser>,
) -> Result<Response, WebError> {
    services::delete_exercise(db.pool(), &user.sub, &exercise_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
