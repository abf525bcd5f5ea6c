//! PostgreSQL backend for the user store.

use sqlx::PgPool;
use tracing::instrument;

use crate::db::errors::Result;
use crate::db::models::UserRecord;
use crate::db::store::UserStore;

/// PostgreSQL-backed user store.
///
/// Holds a connection pool created once at process start and shared across
/// requests.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip(self), err)]
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        // Passthrough read: no filter, no ordering beyond the store's default.
        // The query is checked at runtime because the schema is external.
        let users = sqlx::query_as::<_, UserRecord>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}
