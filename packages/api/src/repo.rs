//! # User storage
//!
//! [`UserStore`] is the seam between the HTTP handlers and durable state. Every
//! method is one statement against the `users` table; "zero rows affected" is
//! reported as `Ok(None)` so the handler can answer 404.
//!
//! | Method | Statement |
//! |--------|-----------|
//! | [`ensure_schema`](UserStore::ensure_schema) | `CREATE TABLE IF NOT EXISTS users (...)` |
//! | [`list`](UserStore::list) | `SELECT id, name FROM users` |
//! | [`insert`](UserStore::insert) | `INSERT ... RETURNING id, name` |
//! | [`update`](UserStore::update) | `UPDATE ... WHERE id = $2 RETURNING id, name` |
//! | [`delete`](UserStore::delete) | `DELETE ... WHERE id = $1 RETURNING id, name` |
//!
//! Implementations: [`PgUserStore`] here, [`crate::memory::MemoryUserStore`] for
//! tests. All values are bound as parameters, never interpolated.

use std::future::Future;

use sqlx::PgPool;
use store::User;

use crate::error::StoreError;

pub(crate) const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL
)";

/// Async storage for user records.
pub trait UserStore: Clone + Send + Sync + 'static {
    fn ensure_schema(&self) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// All rows, in the storage's natural order.
    fn list(&self) -> impl Future<Output = Result<Vec<User>, StoreError>> + Send;

    fn insert(&self, name: &str) -> impl Future<Output = Result<User, StoreError>> + Send;

    fn update(
        &self,
        id: i32,
        name: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;
}

/// PostgreSQL-backed [`UserStore`].
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_user((id, name): (i32, String)) -> User {
    User { id, name }
}

impl UserStore for PgUserStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<(i32, String)> = sqlx::query_as("SELECT id, name FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(to_user).collect())
    }

    async fn insert(&self, name: &str) -> Result<User, StoreError> {
        let row: (i32, String) =
            sqlx::query_as("INSERT INTO users (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(to_user(row))
    }

    async fn update(&self, id: i32, name: &str) -> Result<Option<User>, StoreError> {
        let row: Option<(i32, String)> =
            sqlx::query_as("UPDATE users SET name = $1 WHERE id = $2 RETURNING id, name")
                .bind(name)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(to_user))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, StoreError> {
        let row: Option<(i32, String)> =
            sqlx::query_as("DELETE FROM users WHERE id = $1 RETURNING id, name")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(to_user))
    }
}
