//! MealRegistry - persists and retrieves per-user meal-state choices.

use std::sync::Arc;

use crate::domain::{DomainError, MealEntry, MealRecord};
use crate::ports::MealRepository;

/// Service owning the meal-state upsert and retrieval.
///
/// Validation short-circuits before the store is touched; everything else
/// is delegated to the repository, whose single-statement upsert carries
/// the concurrency contract. The registry never retries.
pub struct MealRegistry {
    repository: Arc<dyn MealRepository>,
}

impl MealRegistry {
    pub fn new(repository: Arc<dyn MealRepository>) -> Self {
        Self { repository }
    }

    /// Record a meal-state choice, replacing the state of an existing
    /// record for the same (user email, date, meal type) triple.
    ///
    /// # Errors
    ///
    /// - `Validation` if any of the four fields is empty
    /// - `Store` on persistence failure
    pub async fn save_meal(&self, record: MealRecord) -> Result<i64, DomainError> {
        record.validate()?;
        self.repository.upsert(&record).await
    }

    /// Every meal record for the given email. An unknown or empty email
    /// yields an empty vec, not an error.
    pub async fn meals_for_user(&self, user_email: &str) -> Result<Vec<MealEntry>, DomainError> {
        self.repository.for_user(user_email).await
    }

    /// The full table. Access control, if any, belongs to the caller.
    pub async fn all_meals(&self) -> Result<Vec<MealRecord>, DomainError> {
        self.repository.all().await
    }
}
