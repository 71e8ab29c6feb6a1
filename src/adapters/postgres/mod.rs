//! PostgreSQL adapters for the repository ports.

mod meal_repository;
mod user_repository;

pub use meal_repository::PostgresMealRepository;
pub use user_repository::PostgresUserRepository;
