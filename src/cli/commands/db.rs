use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::config;
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Apply pending migrations to DATABASE_URL")]
    Migrate,

    #[command(about = "Check that DATABASE_URL accepts connections")]
    Ping,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = &config().database;
    let pool = DatabaseManager::connect(database)
        .await
        .context("could not connect to the database")?;

    match cmd {
        DbCommands::Migrate => {
            DatabaseManager::migrate(&pool).await.context("migration failed")?;
            output_success(&output_format, "Migrations applied", None)
        }
        DbCommands::Ping => {
            DatabaseManager::health_check(&pool).await.context("database did not answer")?;
            output_success(&output_format, "Database reachable", Some(json!({ "database": "ok" })))
        }
    }
}
