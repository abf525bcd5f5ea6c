//! In-memory backend for the user store.
//!
//! Rows live in process memory and are lost on restart. Listing preserves
//! insertion order.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::db::errors::Result;
use crate::db::models::UserRecord;
use crate::db::store::UserStore;

/// In-memory implementation of [`UserStore`].
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl InMemoryUserStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the store.
    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.push(user);
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_user;

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryUserStore::new();
        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_inserted_rows_in_insertion_order() {
        let store = InMemoryUserStore::new();
        store.insert(sample_user(1, "ada@example.com", Some("Ada"))).await;
        store.insert(sample_user(2, "grace@example.com", None)).await;

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "ada@example.com");
        assert_eq!(users[1].email, "grace@example.com");
        assert_eq!(users[1].name, None);
    }
}
