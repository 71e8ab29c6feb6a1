//! HTTP adapter for user roster endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UserHandlers;
pub use routes::user_routes;
