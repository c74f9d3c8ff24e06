//! Task board HTTP server.
//!
//! Reads configuration from the environment, builds the `PostgreSQL`
//! connection pool, and serves the task board router. The `tasks`,
//! `projects`, and `members` tables are expected to exist.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::ServerConfig;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::services::TaskBoardService;
use taskboard::web::{AppState, TemplateEngine, router};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().max_size(config.pool_size).build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = Arc::new(TaskBoardService::new(repository, Arc::new(DefaultClock)));
    let templates = Arc::new(TemplateEngine::new()?);
    let state = AppState::new(service, templates);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "task board listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
