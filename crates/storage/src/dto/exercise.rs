use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Exercise;

/// Request payload for creating a catalog exercise. The exercise id is
/// client-supplied; the owner comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    // Defaulted so an absent field fails validation, not deserialization.
    #[serde(default)]
    #[validate(length(min = 1, message = "exerciseId is required"))]
    pub exercise_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "type is required"))]
    pub exercise_type: String,

    pub time: Option<String>,
    pub distance: Option<Decimal>,
    pub level: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
}

/// Request payload for replacing a catalog exercise. The exercise id comes
/// from the path, the owner from the authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "type is required"))]
    pub exercise_type: String,

    pub time: Option<String>,
    pub distance: Option<Decimal>,
    pub level: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub exercise_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
}

impl From<CreateExerciseRequest> for Exercise {
    fn from(req: CreateExerciseRequest) -> Self {
        Self {
            exercise_id: req.exercise_id,
            name: req.name,
            exercise_type: req.exercise_type,
            time: req.time,
            distance: req.distance,
            level: req.level,
            sets: req.sets,
            reps: req.reps,
            weight: req.weight,
        }
    }
}

impl UpdateExerciseRequest {
    /// Build the replacement entity for the given path id.
    pub fn into_exercise(self, exercise_id: String) -> Exercise {
        Exercise {
            exercise_id,
            name: self.name,
            exercise_type: self.exercise_type,
            time: self.time,
            distance: self.distance,
            level: self.level,
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
        }
    }
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name,
            exercise_type: exercise.exercise_type,
            time: exercise.time,
            distance: exercise.distance,
            level: exercise.level,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
        }
    }
}
