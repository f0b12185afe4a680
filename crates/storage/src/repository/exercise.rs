use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Exercise;

const EXERCISE_COLUMNS: &str =
    "exercise_id, name, exercise_type, time, distance, level, sets, reps, weight";

pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find an exercise by its composite key.
    pub async fn get_by_id(&self, user_id: &str, exercise_id: &str) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE user_id = $1 AND exercise_id = $2"
        ))
        .bind(user_id)
        .bind(exercise_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    /// List every exercise in the user's partition, in one call.
    pub async fn list_by_user_id(&self, user_id: &str) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE user_id = $1 ORDER BY name"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Query the type index, filtered to the requesting user's rows — the
    /// index itself has no user dimension.
    pub async fn list_by_type(&self, user_id: &str, exercise_type: &str) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises \
             WHERE exercise_type = $1 AND user_id = $2 ORDER BY name"
        ))
        .bind(exercise_type)
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Same shape as `list_by_type`, over the name index.
    pub async fn list_by_name(&self, user_id: &str, name: &str) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises \
             WHERE name = $1 AND user_id = $2 ORDER BY exercise_id"
        ))
        .bind(name)
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Conditional write: fails with `AlreadyExists` when the composite key
    /// is already taken.
    pub async fn create(&self, user_id: &str, exercise: &Exercise) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO exercises
                (user_id, exercise_id, name, exercise_type, time, distance, level, sets, reps, weight)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user_id)
        .bind(&exercise.exercise_id)
        .bind(&exercise.name)
        .bind(&exercise.exercise_type)
        .bind(&exercise.time)
        .bind(exercise.distance)
        .bind(&exercise.level)
        .bind(exercise.sets)
        .bind(exercise.reps)
        .bind(exercise.weight)
        .execute(self.pool)
        .await
        .map_err(|e| StorageError::from(e).into_already_exists())?;

        Ok(())
    }

    /// Conditional write: fails with `NotFound` when no row matches the
    /// composite key.
    pub async fn update(&self, user_id: &str, exercise: &Exercise) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE exercises
            SET name = $3, exercise_type = $4, time = $5, distance = $6,
                level = $7, sets = $8, reps = $9, weight = $10
            WHERE user_id = $1 AND exercise_id = $2
            "#,
        )
        .bind(user_id)
        .bind(&exercise.exercise_id)
        .bind(&exercise.name)
        .bind(&exercise.exercise_type)
        .bind(&exercise.time)
        .bind(exercise.distance)
        .bind(&exercise.level)
        .bind(exercise.sets)
        .bind(exercise.reps)
        .bind(exercise.weight)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Hard delete, conditioned on prior existence.
    pub async fn delete(&self, exercise_id: &str, user_id: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM exercises
            WHERE user_id = $1 AND exercise_id = $2
            "#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
