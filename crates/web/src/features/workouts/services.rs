use sqlx::PgPool;
use storage::{
    error::StorageError,
    models::{Exercise, Workout},
    repository::workout::WorkoutRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

fn workout_not_found(e: StorageError) -> WebError {
    match e {
        StorageError::NotFound => WebError::WorkoutNotFound,
        other => WebError::Storage(other),
    }
}

/// List all workouts for a user
pub async fn list_workouts(pool: &PgPool, user_id: &str) -> WebResult<Vec<Workout>> {
    let repo = WorkoutRepository::new(pool);
    Ok(repo.list_by_user_id(user_id).await?)
}

/// Get a workout by its composite key
pub async fn get_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> WebResult<Workout> {
    let repo = WorkoutRepository::new(pool);
    Ok(repo.get_by_id(user_id, workout_id).await?)
}

/// Create a new workout
pub async fn create_workout(pool: &PgPool, workout: &Workout) -> WebResult<()> {
    workout.validate()?;
    let repo = WorkoutRepository::new(pool);
    Ok(repo.create(workout).await?)
}

/// Replace an existing workout wholesale
pub async fn update_workout(pool: &PgPool, workout: &Workout) -> WebResult<()> {
    workout.validate()?;
    let repo = WorkoutRepository::new(pool);
    Ok(repo.update(workout).await?)
}

/// Delete a workout
pub async fn delete_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> WebResult<()> {
    let repo = WorkoutRepository::new(pool);
    Ok(repo.delete(workout_id, user_id).await?)
}

/// The embedded exercise list of a workout
pub async fn list_workout_exercises(
    pool: &PgPool,
    user_id: &str,
    workout_id: Uuid,
) -> WebResult<Vec<Exercise>> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo
        .get_by_id(user_id, workout_id)
        .await
        .map_err(workout_not_found)?;

    Ok(workout.exercises)
}

/// Append an exercise snapshot to a workout's embedded list.
///
/// Read-modify-write with no isolation: the write-back is an unconditioned
/// full replace, so a concurrent add/remove on the same workout can lose an
/// update (last writer wins).
pub async fn add_exercise_to_workout(
    pool: &PgPool,
    user_id: &str,
    workout_id: Uuid,
    exercise: Exercise,
) -> WebResult<Exercise> {
    exercise.validate()?;

    let repo = WorkoutRepository::new(pool);
    let mut workout = repo
        .get_by_id(user_id, workout_id)
        .await
        .map_err(workout_not_found)?;

    workout.exercises.push(exercise.clone());
    repo.update(&workout).await?;

    Ok(exercise)
}

/// Remove the first embedded exercise whose id matches. Same race window as
/// `add_exercise_to_workout`.
pub async fn remove_exercise_from_workout(
    pool: &PgPool,
    user_id: &str,
    workout_id: Uuid,
    exercise_id: &str,
) -> WebResult<()> {
    let repo = WorkoutRepository::new(pool);
    let mut workout = repo
        .get_by_id(user_id, workout_id)
        .await
        .map_err(workout_not_found)?;

    let Some(position) = workout
        .exercises
        .iter()
        .position(|ex| ex.exercise_id == exercise_id)
    else {
        return Err(WebError::ExerciseNotFound);
    };

    workout.exercises.remove(position);
    Ok(repo.update(&workout).await?)
}
