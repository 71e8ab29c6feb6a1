//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{DomainError, NewUser, UserRecord};
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<i64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, firstname, lastname, job, room_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.job)
        .bind(&user.room_number)
        .fetch_one(&self.pool)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::duplicate_email(user.email.clone()));
            }
            Err(e) => {
                return Err(DomainError::store(format!("Failed to insert user: {}", e)));
            }
        };

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?;

        Ok(id)
    }

    async fn list_ordered(&self) -> Result<Vec<UserRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, firstname, lastname, job, room_number
            FROM users
            ORDER BY lastname ASC, firstname ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch users: {}", e)))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, firstname, lastname, job, room_number
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch user by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(row)?)),
            None => Ok(None),
        }
    }
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<UserRecord, DomainError> {
    Ok(UserRecord {
        id: row
            .try_get("id")
            .map_err(|e| DomainError::store(format!("Failed to get id: {}", e)))?,
        email: row
            .try_get("email")
            .map_err(|e| DomainError::store(format!("Failed to get email: {}", e)))?,
        firstname: row
            .try_get("firstname")
            .map_err(|e| DomainError::store(format!("Failed to get firstname: {}", e)))?,
        lastname: row
            .try_get("lastname")
            .map_err(|e| DomainError::store(format!("Failed to get lastname: {}", e)))?,
        job: row
            .try_get("job")
            .map_err(|e| DomainError::store(format!("Failed to get job: {}", e)))?,
        room_number: row
            .try_get("room_number")
            .map_err(|e| DomainError::store(format!("Failed to get room_number: {}", e)))?,
    })
}
