//! Database Config

use std::time::Duration;

use catalog_app::database::PoolOptions;
use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled connections.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 25_u32)]
    pub database_max_connections: u32,

    /// Connections kept open while idle.
    #[arg(long, env = "DATABASE_MIN_CONNECTIONS", default_value_t = 5_u32)]
    pub database_min_connections: u32,

    /// Seconds to wait for a free connection.
    #[arg(long, env = "DATABASE_ACQUIRE_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub database_acquire_timeout_seconds: u64,

    /// Seconds after which a connection is recycled.
    #[arg(long, env = "DATABASE_MAX_LIFETIME_SECONDS", default_value_t = 300_u64)]
    pub database_max_lifetime_seconds: u64,

    /// Apply pending migrations before serving.
    #[arg(long, env = "DATABASE_RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Pool settings for [`catalog_app::database::connect`].
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.database_max_connections,
            min_connections: self.database_min_connections,
            acquire_timeout: Duration::from_secs(self.database_acquire_timeout_seconds),
            max_lifetime: Duration::from_secs(self.database_max_lifetime_seconds),
        }
    }
}
