//! Domain types for meal attendance and the user roster.

mod errors;
mod meal;
mod user;

pub use errors::DomainError;
pub use meal::{MealEntry, MealRecord};
pub use user::{NewUser, UserRecord};
