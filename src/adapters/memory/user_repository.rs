//! In-memory implementation of UserRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{DomainError, NewUser, UserRecord};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<UserRecord>,
    next_id: i64,
}

/// In-memory user store with the same email-uniqueness contract as the
/// SQL adapter: the duplicate check and the insert happen under one lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create an empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<i64, DomainError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(DomainError::duplicate_email(user.email.clone()));
        }
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push(UserRecord {
            id,
            email: user.email.clone(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            job: user.job.clone(),
            room_number: user.room_number.clone(),
        });
        Ok(id)
    }

    async fn list_ordered(&self) -> Result<Vec<UserRecord>, DomainError> {
        let table = self.table.read().await;
        let mut users = table.rows.clone();
        users.sort_by(|a, b| {
            (a.lastname.as_str(), a.firstname.as_str())
                .cmp(&(b.lastname.as_str(), b.firstname.as_str()))
        });
        Ok(users)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }
}
