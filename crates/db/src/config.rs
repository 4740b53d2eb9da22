//! Database configuration loaded from environment variables.

/// Connection settings for the Postgres pool.
///
/// In production, override via environment variables; `.env` files are
/// honoured for local development.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Pool size cap (default: `20`).
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default  |
    /// |----------------------------|----------|
    /// | `DATABASE_URL`             | required |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`     |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            database_url,
            max_connections,
        }
    }
}
