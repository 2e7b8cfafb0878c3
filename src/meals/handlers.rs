use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{CreateMealRequest, MealListResponse, MealResponse, UpdateMealRequest},
    metrics::MealMetrics,
    repo_types::{Meal, MealChanges},
};
use crate::{
    auth::{dto::MessageResponse, AuthUser},
    error::{AppError, Result},
    state::AppState,
    validation::ValidatedJson,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route(
            "/meals/:id",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/users/metrics", get(user_metrics))
}

/// A path id that is not a UUID cannot name any meal.
fn parse_meal_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| meal_not_found())
}

fn meal_not_found() -> AppError {
    AppError::NotFound("Meal not found".into())
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MealListResponse>> {
    let meals = Meal::list_by_user(&state.db, user_id).await?;
    Ok(Json(MealListResponse { meals }))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MealResponse>> {
    let meal_id = parse_meal_id(&id)?;
    let meal = Meal::find_for_user(&state.db, user_id, meal_id)
        .await?
        .ok_or_else(meal_not_found)?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state, body))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(body): ValidatedJson<CreateMealRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let meal = Meal::create(&state.db, user_id, &body.into()).await?;
    info!(%user_id, meal_id = %meal.id, "meal created");
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Meal created"))))
}

#[instrument(skip(state, body))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateMealRequest>,
) -> Result<Json<MessageResponse>> {
    let changes = MealChanges::from(body);
    if changes.is_empty() {
        return Err(AppError::Validation("no fields to update".into()));
    }
    let meal_id = parse_meal_id(&id)?;

    let updated = Meal::update_for_user(&state.db, user_id, meal_id, &changes).await?;
    if updated == 0 {
        return Err(meal_not_found());
    }
    info!(%user_id, %meal_id, "meal updated");
    Ok(Json(MessageResponse::new("Meal updated")))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let meal_id = parse_meal_id(&id)?;
    let deleted = Meal::delete_for_user(&state.db, user_id, meal_id).await?;
    if deleted == 0 {
        return Err(meal_not_found());
    }
    info!(%user_id, %meal_id, "meal deleted");
    Ok(Json(MessageResponse::new("Meal deleted")))
}

#[instrument(skip(state))]
pub async fn user_metrics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MealMetrics>> {
    let meals = Meal::list_by_user(&state.db, user_id).await?;
    Ok(Json(MealMetrics::from_flags(
        meals.iter().map(|m| m.within_diet),
    )))
}
