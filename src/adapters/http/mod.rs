//! HTTP adapters - REST API implementation.
//!
//! Each domain module has its own router; `api_router` assembles them
//! under `/api` next to the health probe.

pub mod health;
pub mod meals;
pub mod users;

mod error;

pub use error::ErrorResponse;
pub use meals::MealHandlers;
pub use users::UserHandlers;

use axum::routing::get;
use axum::Router;

/// Assembles the full application router.
pub fn api_router(meals: MealHandlers, users: UserHandlers) -> Router {
    let api = meals::meal_routes(meals).merge(users::user_routes(users));
    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health))
}
