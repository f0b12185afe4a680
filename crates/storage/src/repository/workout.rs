use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a workout by its composite key.
    pub async fn get_by_id(&self, user_id: &str, workout_id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT user_id, workout_id, name, exercises, created_at
            FROM workouts
            WHERE user_id = $1 AND workout_id = $2
            "#,
        )
        .bind(user_id)
        .bind(workout_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// List every workout in the user's partition, in one call.
    pub async fn list_by_user_id(&self, user_id: &str) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT user_id, workout_id, name, exercises, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Conditional write: fails with `AlreadyExists` when the composite key
    /// is already taken, so two concurrent creates of the same id cannot
    /// both succeed.
    pub async fn create(&self, workout: &Workout) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workouts (user_id, workout_id, name, exercises, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&workout.user_id)
        .bind(workout.workout_id)
        .bind(&workout.name)
        .bind(Json(&workout.exercises))
        .bind(workout.created_at)
        .execute(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_already_exists())?;

        Ok(())
    }

    /// Conditional write: fails with `NotFound` when no row matches the
    /// composite key, so an update can never create. Key columns and
    /// `created_at` are never replaced.
    pub async fn update(&self, workout: &Workout) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET name = $3, exercises = $4
            WHERE user_id = $1 AND workout_id = $2
            "#,
        )
        .bind(&workout.user_id)
        .bind(workout.workout_id)
        .bind(&workout.name)
        .bind(Json(&workout.exercises))
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Hard delete, conditioned on prior existence.
    pub async fn delete(&self, workout_id: Uuid, user_id: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE user_id = $1 AND workout_id = $2
            "#,
        )
        .bind(user_id)
        .bind(workout_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
