//! In-memory adapters for the repository ports.
//!
//! Useful for testing and development. A single lock per table gives the
//! same one-writer-at-a-time upsert contract the SQL statement gives.

mod meal_repository;
mod user_repository;

pub use meal_repository::InMemoryMealRepository;
pub use user_repository::InMemoryUserRepository;
