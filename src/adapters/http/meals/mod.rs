//! HTTP adapter for meal endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::MealHandlers;
pub use routes::meal_routes;
