//! Application services.
//!
//! Thin orchestration over the repository ports: validate input, issue one
//! store call, forward the result. No in-process state lives here; the
//! relational store is the single source of truth.

mod meal_registry;
mod user_directory;

pub use meal_registry::MealRegistry;
pub use user_directory::UserDirectory;
