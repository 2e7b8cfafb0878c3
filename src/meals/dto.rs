use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use validator::{Validate, ValidationError};

use super::repo_types::{Meal, MealChanges, NewMeal};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    #[validate(length(max = 20, message = "name must be at most 20 characters"))]
    pub name: String,
    #[validate(length(max = 150, message = "description must be at most 150 characters"))]
    pub description: String,
    #[validate(custom(function = "validate_timestamp"))]
    pub datetime: String,
    pub within_diet: bool,
}

/// Accepts RFC 3339 with any offset; the string itself is stored untouched.
fn validate_timestamp(value: &str) -> Result<(), ValidationError> {
    if OffsetDateTime::parse(value, &Rfc3339).is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new("datetime");
    error.message = Some("datetime must be an RFC 3339 timestamp".into());
    Err(error)
}

impl From<CreateMealRequest> for NewMeal {
    fn from(r: CreateMealRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            datetime: r.datetime,
            within_diet: r.within_diet,
        }
    }
}

/// Partial meal update; fields that are absent (or null) are left alone.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    #[serde(default)]
    #[validate(length(max = 20, message = "name must be at most 20 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 150, message = "description must be at most 150 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_timestamp"))]
    pub datetime: Option<String>,
    #[serde(default)]
    pub within_diet: Option<bool>,
}

impl From<UpdateMealRequest> for MealChanges {
    fn from(r: UpdateMealRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            datetime: r.datetime,
            within_diet: r.within_diet,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}
