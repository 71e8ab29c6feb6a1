//! HTTP routes for meal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_all_meals, get_meals, save_meal, MealHandlers};

/// Creates the meal router with all endpoints.
pub fn meal_routes(handlers: MealHandlers) -> Router {
    Router::new()
        .route("/save-meal", post(save_meal))
        .route("/get-meals", get(get_meals))
        .route("/get-all-meals", get(get_all_meals))
        .with_state(handlers)
}
