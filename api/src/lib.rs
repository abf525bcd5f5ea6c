//! # api: Supplement Tracker API server
//!
//! HTTP server for the supplement tracker. It exposes a single route,
//! `GET /users`, which answers with a JSON array of every row in the external
//! `users` table. User rows are created and mutated by other systems; this
//! service only reads them.
//!
//! ## Architecture
//!
//! The server is built on [Axum](https://github.com/tokio-rs/axum) with
//! PostgreSQL reached through sqlx. The **API layer** ([`api`]) holds the
//! route handler and its response models, the **database layer** ([`db`])
//! holds the [`db::store::UserStore`] seam with Postgres and in-memory
//! backends, and [`config`] / [`telemetry`] / [`errors`] carry configuration,
//! logging, and the error-to-response mapping.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use api::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = api::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     api::telemetry::init_telemetry()?;
//!
//!     Application::new(config)?.serve().await
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};

pub use config::Config;
use db::store::{PostgresUserStore, UserStore};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only access to the user collection
    pub store: Arc<dyn UserStore>,
    /// Application configuration loaded from file/environment
    pub config: Config,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/users", get(api::handlers::users::list_users))
        .with_state(state);

    // Add tracing layer
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Main application struct that owns the router and configuration.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] builds the connection pool and router
/// 2. **Serve**: [`Application::serve`] binds the TCP listener and handles
///    requests until the process exits (there is no shutdown path)
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance backed by PostgreSQL.
    ///
    /// The pool connects lazily, so the database does not need to be
    /// reachable here.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting API server with configuration: {:?}", config);

        let pool = db::connect(&config.database_url)?;
        let store = Arc::new(PostgresUserStore::new(pool));

        Ok(Self::with_store(config, store))
    }

    /// Create an application around an explicit store backend.
    pub fn with_store(config: Config, store: Arc<dyn UserStore>) -> Self {
        let state = AppState {
            store,
            config: config.clone(),
        };
        let router = build_router(state);

        Self { router, config }
    }

    /// Bind the listener and start serving.
    ///
    /// Returns an error if the address cannot be bound; the caller decides
    /// how to exit.
    pub async fn serve(self) -> anyhow::Result<()> {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("API server listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn serve_fails_when_port_is_taken() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            ..Config::default()
        };
        let app = Application::new(config).unwrap();

        let result = app.serve().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = crate::test_utils::test_server(Arc::new(
            crate::db::store::InMemoryUserStore::new(),
        ));
        let response = server.get("/nope").await;
        response.assert_status_not_found();
    }
}
