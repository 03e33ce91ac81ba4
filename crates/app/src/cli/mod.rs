use catalog_app::{
    context::AppContext,
    database::{self, PoolOptions},
};
use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;

mod db;
mod plan;
mod product;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Product(product::ProductCommand),
    Plan(plan::PlanCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Product(command) => product::run(command).await,
            Commands::Plan(command) => plan::run(command).await,
        }
    }
}

/// Connection flags shared by every command that touches the database.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn pool(&self) -> Result<PgPool, String> {
        let options = PoolOptions {
            max_connections: 2,
            min_connections: 0,
            ..PoolOptions::default()
        };

        database::connect(&self.database_url, &options)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        Ok(AppContext::from_pool(self.pool().await?))
    }
}
