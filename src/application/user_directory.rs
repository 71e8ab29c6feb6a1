//! UserDirectory - user creation with uniqueness enforcement, listing
//! and email lookup.

use std::sync::Arc;

use crate::domain::{DomainError, NewUser, UserRecord};
use crate::ports::UserRepository;

/// Service owning the user roster.
pub struct UserDirectory {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create a roster entry and return its id. Uniqueness on email comes
    /// from the store's constraint, not an application-level pre-check, so
    /// concurrent creators of the same email cannot race past each other.
    ///
    /// # Errors
    ///
    /// - `Validation` if email, firstname or lastname is empty
    /// - `DuplicateEmail` if the email is already taken
    /// - `Store` on any other persistence failure
    pub async fn create_user(&self, user: NewUser) -> Result<i64, DomainError> {
        user.validate()?;
        self.repository.insert(&user).await
    }

    /// All users ordered by (lastname, firstname) ascending. The ordering
    /// is part of the contract; it is used for display.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.repository.list_ordered().await
    }

    /// Login-style lookup: exact email match, no credential check.
    ///
    /// # Errors
    ///
    /// - `UnknownEmail` when no roster entry matches
    /// - `Store` on persistence failure
    pub async fn find_by_email(&self, email: &str) -> Result<UserRecord, DomainError> {
        match self.repository.find_by_email(email).await? {
            Some(user) => Ok(user),
            None => Err(DomainError::unknown_email(email)),
        }
    }
}
