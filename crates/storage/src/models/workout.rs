use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Exercise;

/// A workout owned by exactly one user. The `(user_id, workout_id)` pair is
/// the storage primary key and is immutable once created; updates replace
/// the name and the embedded exercise list only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub workout_id: Uuid,

    #[validate(length(
        min = 1,
        max = 100,
        message = "name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Denormalized snapshots of catalog exercises, stored as JSONB.
    #[sqlx(json)]
    pub exercises: Vec<Exercise>,

    pub created_at: DateTime<Utc>,
}
