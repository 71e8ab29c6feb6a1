//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_user, get_users, login, UserHandlers};

/// Creates the user router with all endpoints.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/get-users", get(get_users))
        .route("/login", post(login))
        .with_state(handlers)
}
