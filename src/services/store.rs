//! # Record Store
//!
//! This module defines the read-only queries the handlers issue against the
//! external user directory, and the PostgreSQL implementation used in deployment.
//!
//! ## Implementations
//!
//! - [`PgRecordStore`] - Queries a PostgreSQL `users` table through a connection pool
//!
//! Tests substitute their own implementation of [`RecordStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, error, instrument, trace};

/// Errors that can occur while querying the record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only queries against the user directory
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the number of user records.
    async fn count_users(&self) -> Result<i64, StoreError>;

    /// Executes a lookup statement verbatim. Results are not returned.
    ///
    /// The statement is sent as-is, without parameter binding.
    async fn execute_lookup(&self, statement: &str) -> Result<(), StoreError>;
}

/// [`RecordStore`] backed by a PostgreSQL connection pool
pub struct PgRecordStore {
    db_pool: PgPool,
}

impl PgRecordStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    #[instrument(skip_all)]
    async fn count_users(&self) -> Result<i64, StoreError> {
        trace!("Counting user records");

        match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db_pool)
            .await
        {
            Ok(count) => {
                debug!(count, "User records counted");
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, "Failed to count user records");
                Err(StoreError::Database(e))
            }
        }
    }

    #[instrument(skip_all, fields(statement_length = statement.len()))]
    async fn execute_lookup(&self, statement: &str) -> Result<(), StoreError> {
        trace!(%statement, "Executing lookup statement");

        let result = sqlx::raw_sql(statement).execute(&self.db_pool).await?;
        debug!(rows = result.rows_affected(), "Lookup statement executed");
        Ok(())
    }
}
