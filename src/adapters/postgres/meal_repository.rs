//! PostgreSQL implementation of MealRepository.
//!
//! The upsert is a single `INSERT ... ON CONFLICT DO UPDATE` statement so
//! the store serializes concurrent writers to the same identity triple.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{DomainError, MealEntry, MealRecord};
use crate::ports::MealRepository;

/// PostgreSQL implementation of MealRepository.
#[derive(Clone)]
pub struct PostgresMealRepository {
    pool: PgPool,
}

impl PostgresMealRepository {
    /// Creates a new PostgresMealRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MealRepository for PostgresMealRepository {
    async fn upsert(&self, record: &MealRecord) -> Result<i64, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO meals (user_email, date, meal_type, state)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_email, date, meal_type)
            DO UPDATE SET state = EXCLUDED.state
            RETURNING id
            "#,
        )
        .bind(&record.user_email)
        .bind(&record.date)
        .bind(&record.meal_type)
        .bind(&record.state)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to upsert meal: {}", e)))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?;

        Ok(id)
    }

    async fn for_user(&self, user_email: &str) -> Result<Vec<MealEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT date, meal_type, state
            FROM meals
            WHERE user_email = $1
            "#,
        )
        .bind(user_email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch meals for user: {}", e)))?;

        rows.into_iter().map(row_to_entry).collect()
    }

    async fn all(&self) -> Result<Vec<MealRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_email, date, meal_type, state
            FROM meals
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch all meals: {}", e)))?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn row_to_entry(row: sqlx::postgres::PgRow) -> Result<MealEntry, DomainError> {
    Ok(MealEntry {
        date: get_text(&row, "date")?,
        meal_type: get_text(&row, "meal_type")?,
        state: get_text(&row, "state")?,
    })
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<MealRecord, DomainError> {
    Ok(MealRecord {
        user_email: get_text(&row, "user_email")?,
        date: get_text(&row, "date")?,
        meal_type: get_text(&row, "meal_type")?,
        state: get_text(&row, "state")?,
    })
}

fn get_text(row: &sqlx::postgres::PgRow, column: &str) -> Result<String, DomainError> {
    row.try_get(column)
        .map_err(|e| DomainError::store(format!("Failed to get {}: {}", column, e)))
}
