//! HTTP handlers for meal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::MealRegistry;
use crate::domain::DomainError;

use super::dto::{MealsQuery, SaveMealRequest, SaveMealResponse};

/// Handler state for meal endpoints.
#[derive(Clone)]
pub struct MealHandlers {
    registry: Arc<MealRegistry>,
}

impl MealHandlers {
    pub fn new(registry: Arc<MealRegistry>) -> Self {
        Self { registry }
    }
}

/// POST /api/save-meal - record a meal-state choice (idempotent upsert)
pub async fn save_meal(
    State(handlers): State<MealHandlers>,
    Json(req): Json<SaveMealRequest>,
) -> Response {
    match handlers.registry.save_meal(req.into()).await {
        Ok(id) => {
            let response = SaveMealResponse {
                message: "Meal saved".to_string(),
                id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_meal_error(e),
    }
}

/// GET /api/get-meals?userEmail= - list one user's meals
pub async fn get_meals(
    State(handlers): State<MealHandlers>,
    Query(query): Query<MealsQuery>,
) -> Response {
    let user_email = query.user_email.unwrap_or_default();
    match handlers.registry.meals_for_user(&user_email).await {
        Ok(meals) => (StatusCode::OK, Json(meals)).into_response(),
        Err(e) => handle_meal_error(e),
    }
}

/// GET /api/get-all-meals - dump the full table
pub async fn get_all_meals(State(handlers): State<MealHandlers>) -> Response {
    match handlers.registry.all_meals().await {
        Ok(meals) => (StatusCode::OK, Json(meals)).into_response(),
        Err(e) => handle_meal_error(e),
    }
}

fn handle_meal_error(error: DomainError) -> Response {
    match error {
        DomainError::Validation { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        DomainError::Store(detail) => {
            tracing::error!(%detail, "meal store fault");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
        // Duplicate and unknown emails cannot arise from meal operations.
        other => {
            tracing::error!(error = %other, "unexpected meal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
