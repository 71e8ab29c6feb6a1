//! User repository port.

use async_trait::async_trait;

use crate::domain::{DomainError, NewUser, UserRecord};

/// Repository port for the user roster.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a roster entry and return its id. Uniqueness on email is
    /// enforced by the store's constraint; a violation maps to
    /// `DuplicateEmail` without mutating state.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is already taken
    /// - `Store` on any other persistence failure
    async fn insert(&self, user: &NewUser) -> Result<i64, DomainError>;

    /// All roster entries ordered by (lastname, firstname) ascending.
    async fn list_ordered(&self) -> Result<Vec<UserRecord>, DomainError>;

    /// Exact-match lookup by email. Absence is a normal outcome, returned
    /// as `None` rather than an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;
}
