//! API response models for users.

use crate::db::models::UserRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as serialized on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(db: UserRecord) -> Self {
        Self {
            id: db.id,
            email: db.email,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
