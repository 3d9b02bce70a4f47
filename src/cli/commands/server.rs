use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::{envelope_error, output_success, server_url};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from the /health endpoint")]
    Health {
        #[arg(long, help = "Server base URL (default: CRM_URL or http://localhost:2022)")]
        url: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health { url } => {
            let base = server_url(url);
            let response = reqwest::get(format!("{}/health", base)).await?;
            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);

            if !status.is_success() {
                anyhow::bail!("{} is unhealthy ({}): {}", base, status, envelope_error(&body));
            }

            output_success(
                &output_format,
                &format!("{} is healthy", base),
                Some(json!({ "health": body["data"].clone() })),
            )
        }
    }
}
