use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::exercise::ExerciseResponse;
use crate::models::{Exercise, Workout};

/// Request payload for creating a new workout. The workout id and creation
/// timestamp are server-assigned; the owner comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    // Defaulted so an absent field fails validation, not deserialization.
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub exercises: Option<Vec<Exercise>>,
}

/// Request payload for replacing an existing workout wholesale. The key
/// fields and the creation timestamp are never replaced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub exercises: Option<Vec<Exercise>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub user_id: String,
    pub workout_id: Uuid,
    pub name: String,
    pub exercises: Vec<ExerciseResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            user_id: workout.user_id,
            workout_id: workout.workout_id,
            name: workout.name,
            exercises: workout
                .exercises
                .into_iter()
                .map(ExerciseResponse::from)
                .collect(),
            created_at: workout.created_at,
        }
    }
}
