//! Database models for users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the external `users` table.
///
/// Decoded with `FromRow` from a `SELECT *`, so columns this struct does not
/// name are tolerated. The table itself is created and mutated outside this
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
