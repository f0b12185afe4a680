use sqlx::PgPool;
use storage::{models::Exercise, repository::exercise::ExerciseRepository};
use validator::Validate;

use crate::error::WebResult;

/// Get a catalog exercise by its composite key
pub async fn get_exercise(pool: &PgPool, user_id: &str, exercise_id: &str) -> WebResult<Exercise> {
    let repo = ExerciseRepository::new(pool);
    Ok(repo.get_by_id(user_id, exercise_id).await?)
}

/// List all catalog exercises for a user
pub async fn list_exercises(pool: &PgPool, user_id: &str) -> WebResult<Vec<Exercise>> {
    let repo = ExerciseRepository::new(pool);
    Ok(repo.list_by_user_id(user_id).await?)
}

/// List a user's catalog exercises of a given type
pub async fn list_exercises_by_type(
    pool: &PgPool,
    user_id: &str,
    exercise_type: &str,
) -> WebResult<Vec<Exercise>> {
    let repo = ExerciseRepository::new(pool);
    Ok(repo.list_by_type(user_id, exercise_type).await?)
}

/// List a user's catalog exercises with a given name
pub async fn list_exercises_by_name(
    pool: &PgPool,
    user_id: &str,
    name: &str,
) -> WebResult<Vec<Exercise>> {
    let repo = ExerciseRepository::new(pool);
    Ok(repo.list_by_name(user_id, name).await?)
}

/// Create a catalog exercise
pub async fn create_exercise(pool: &PgPool, user_id: &str, exercise: &Exercise) -> WebResult<()> {
    exercise.validate()?;
    let repo = ExerciseRepository::new(pool);
    Ok(repo.create(user_id, exercise).await?)
}

/// Replace a catalog exercise
pub async fn update_exercise(pool: &PgPool, user_id: &str, exercise: &Exercise) -> WebResult<()> {
    exercise.validate()?;
    let repo = ExerciseRepository::new(pool);
    Ok(repo.update(user_id, exercise).await?)
}

/// Delete a catalog exercise
pub async fn delete_exercise(pool: &PgPool, user_id: &str, exercise_id: &str) -> WebResult<()> {
    let repo = ExerciseRepository::new(pool);
    Ok(repo.delete(exercise_id, user_id).await?)
}
