//! In-memory implementation of MealRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{DomainError, MealEntry, MealRecord};
use crate::ports::MealRepository;

#[derive(Debug, Default)]
struct MealTable {
    rows: Vec<(i64, MealRecord)>,
    next_id: i64,
}

/// In-memory meal store. The whole table sits behind one lock, so the
/// check-and-update inside `upsert` is atomic with respect to other
/// callers, matching the single-statement contract of the SQL adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealRepository {
    table: Arc<RwLock<MealTable>>,
}

impl InMemoryMealRepository {
    /// Create an empty in-memory meal store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows (useful for tests).
    pub async fn row_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl MealRepository for InMemoryMealRepository {
    async fn upsert(&self, record: &MealRecord) -> Result<i64, DomainError> {
        let mut table = self.table.write().await;
        if let Some((id, existing)) = table
            .rows
            .iter_mut()
            .find(|(_, r)| r.key() == record.key())
        {
            existing.state = record.state.clone();
            return Ok(*id);
        }
        table.next_id += 1;
        let id = table.next_id;
        table.rows.push((id, record.clone()));
        Ok(id)
    }

    async fn for_user(&self, user_email: &str) -> Result<Vec<MealEntry>, DomainError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|(_, r)| r.user_email == user_email)
            .map(|(_, r)| MealEntry::from(r.clone()))
            .collect())
    }

    async fn all(&self) -> Result<Vec<MealRecord>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().map(|(_, r)| r.clone()).collect())
    }
}
