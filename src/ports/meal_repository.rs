//! Meal repository port.
//!
//! The central contract is `upsert`: one atomic conflict-resolving write
//! keyed on the (user email, date, meal type) triple. Implementations must
//! not split it into an existence check followed by a conditional write;
//! that reintroduces the race the triple's uniqueness exists to prevent.

use async_trait::async_trait;

use crate::domain::{DomainError, MealEntry, MealRecord};

/// Repository port for meal-state persistence.
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Insert the record, or replace only its state if the identity triple
    /// already exists. Two concurrent callers writing the same triple must
    /// serialize into one final state (last writer wins), never a duplicate
    /// row.
    ///
    /// Returns the row id. On the update path the id refers to the
    /// pre-existing row; callers must not depend on it.
    ///
    /// # Errors
    ///
    /// - `Store` on any persistence failure
    async fn upsert(&self, record: &MealRecord) -> Result<i64, DomainError>;

    /// All meal rows for one email, no ordering guarantee.
    /// No matches is an empty vec, not an error.
    async fn for_user(&self, user_email: &str) -> Result<Vec<MealEntry>, DomainError>;

    /// Unrestricted dump of the full table, one row per distinct triple.
    async fn all(&self) -> Result<Vec<MealRecord>, DomainError>;
}
