pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "crm")]
#[command(about = "Sitebook CRM operator CLI")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Database schema and connectivity")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },

    #[command(about = "Probe a running server")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Authenticate against a running server")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json && !cli.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Db { cmd } => commands::db::handle(cmd, output_format).await,
        Commands::Server { cmd } => commands::server::handle(cmd, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
    }
}
