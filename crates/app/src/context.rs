//! App Context

use std::sync::Arc;

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    database::{self, PoolOptions},
    domain::{
        products::{DefaultProductsService, ProductsService},
        subscriptions::{DefaultSubscriptionPlansService, SubscriptionPlansService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub subscriptions: Arc<dyn SubscriptionPlansService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        options: &PoolOptions,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, options)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::from_pool(pool))
    }

    /// Wire Postgres-backed services onto an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            products: Arc::new(DefaultProductsService::postgres(pool.clone())),
            subscriptions: Arc::new(DefaultSubscriptionPlansService::postgres(pool)),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
