use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A catalog exercise. Ownership (the user half of the composite key) lives
/// in the storage row, not here, so copies embedded in a workout carry no
/// owner field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[validate(length(min = 1, message = "exerciseId is required"))]
    pub exercise_id: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
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
