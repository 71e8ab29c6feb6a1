//! Meal attendance records.
//!
//! A meal record captures a user's declared intention for one meal on one
//! day. The (user email, date, meal type) triple is the identity key: at
//! most one record exists per triple, and a later write for the same triple
//! replaces only the state.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A meal-state choice for one (user email, date, meal type) triple.
///
/// Dates and meal types are kept as plain text, matching the store format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub user_email: String,
    pub date: String,
    pub meal_type: String,
    pub state: String,
}

impl MealRecord {
    /// Checks that all four fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_email.trim().is_empty() {
            return Err(DomainError::validation("userEmail"));
        }
        if self.date.trim().is_empty() {
            return Err(DomainError::validation("date"));
        }
        if self.meal_type.trim().is_empty() {
            return Err(DomainError::validation("mealType"));
        }
        if self.state.trim().is_empty() {
            return Err(DomainError::validation("state"));
        }
        Ok(())
    }

    /// The identity triple this record is keyed on.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.user_email, &self.date, &self.meal_type)
    }
}

/// One meal row scoped to a single user, as returned by per-user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub date: String,
    pub meal_type: String,
    pub state: String,
}

impl From<MealRecord> for MealEntry {
    fn from(record: MealRecord) -> Self {
        Self {
            date: record.date,
            meal_type: record.meal_type,
            state: record.state,
        }
    }
}
