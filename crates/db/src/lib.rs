//! Persistence layer for the beatstore backend.
//!
//! Everything the service layer needs lives behind [`Repositories`]: one
//! repository per aggregate (accounts, artists, products, beats, playlists,
//! carts), all issuing parameterized SQL against a shared [`sqlx::PgPool`].

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod update;

pub use config::DbConfig;
pub use error::{DbError, DbResult};
pub use repositories::Repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Cheap liveness probe against the store.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
