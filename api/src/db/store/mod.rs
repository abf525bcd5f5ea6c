use crate::db::errors::Result;
use crate::db::models::UserRecord;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;

/// Read-only access to the user collection.
///
/// Implementations are interchangeable behind `Arc<dyn UserStore>`: Postgres
/// in production, in-memory in tests and single-process setups.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch every user row, in whatever order the backend returns them.
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}
