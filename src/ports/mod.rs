//! Ports - Interfaces for the relational store.
//!
//! Following hexagonal architecture, ports define the contract between the
//! application services and the storage technology. Adapters implement
//! these ports, so the store can be swapped without touching the
//! request-handling logic.

mod meal_repository;
mod user_repository;

pub use meal_repository::MealRepository;
pub use user_repository::UserRepository;
