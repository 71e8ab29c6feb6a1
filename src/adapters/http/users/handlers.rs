//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::UserDirectory;
use crate::domain::DomainError;

use super::dto::{CreateUserRequest, CreateUserResponse, LoginRequest};

/// Handler state for user endpoints.
#[derive(Clone)]
pub struct UserHandlers {
    directory: Arc<UserDirectory>,
}

impl UserHandlers {
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }
}

/// POST /api/create-user - add a roster entry
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    match handlers.directory.create_user(req.into()).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateUserResponse { id })).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/get-users - list the roster ordered by (lastname, firstname)
pub async fn get_users(State(handlers): State<UserHandlers>) -> Response {
    match handlers.directory.list_users().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// POST /api/login - bare email lookup returning the full user row
pub async fn login(
    State(handlers): State<UserHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let email = req.email.unwrap_or_default();
    match handlers.directory.find_by_email(&email).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => handle_user_error(e),
    }
}

fn handle_user_error(error: DomainError) -> Response {
    match error {
        DomainError::Validation { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        DomainError::DuplicateEmail { .. } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.to_string())),
        )
            .into_response(),
        DomainError::UnknownEmail { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.to_string())),
        )
            .into_response(),
        DomainError::Store(detail) => {
            tracing::error!(%detail, "user store fault");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
