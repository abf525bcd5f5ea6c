//! Database layer for user data access.
//!
//! The schema for the `users` table lives outside this repository (it is owned
//! by the deployment's migration system), so this layer is read-only: a store
//! trait with a PostgreSQL backend for production and an in-memory backend for
//! tests.
//!
//! - [`store`]: the [`store::UserStore`] trait and its backends
//! - [`models`]: row structures decoded from the external schema
//! - [`errors`]: database-specific error types

pub mod errors;
pub mod models;
pub mod store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a lazily-connecting Postgres pool for the given URL.
///
/// Connections are established on first use; an unreachable database surfaces
/// as an error on the query that needed it, not at startup.
pub fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().connect_lazy(database_url)
}
