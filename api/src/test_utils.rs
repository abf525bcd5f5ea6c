//! Shared constructors for tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::db::models::UserRecord;
use crate::db::store::UserStore;
use crate::{build_router, AppState, Config};

/// Spin up an axum-test server over the real router with the given store.
pub fn test_server(store: Arc<dyn UserStore>) -> axum_test::TestServer {
    let state = AppState {
        store,
        config: Config::default(),
    };
    axum_test::TestServer::new(build_router(state)).expect("Failed to create test server")
}

/// Build a user row with fixed timestamps.
pub fn sample_user(id: i32, email: &str, name: Option<&str>) -> UserRecord {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    UserRecord {
        id,
        email: email.to_string(),
        name: name.map(str::to_string),
        created_at,
        updated_at: created_at,
    }
}
