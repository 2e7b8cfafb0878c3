pub mod dto;
pub mod handlers;
pub mod metrics;
pub mod repo;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use metrics::MealMetrics;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::meal_routes())
        .merge(handlers::metrics_routes())
}
