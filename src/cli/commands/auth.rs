use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::utils::{envelope_error, server_url};
use crate::cli::OutputFormat;
use crate::schema::LoginInput;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log in and print a bearer token")]
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "Server base URL (default: CRM_URL or http://localhost:2022)")]
        url: Option<String>,
    },
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password, url } => {
            let base = server_url(url);
            let response = reqwest::Client::new()
                .post(format!("{}/rpc/login", base))
                .json(&LoginInput { email, password })
                .send()
                .await?;

            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);
            if !status.is_success() {
                anyhow::bail!("Login failed ({}): {}", status, envelope_error(&body));
            }

            let token = body["data"]["token"]
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("Login response carried no token"))?;

            match output_format {
                OutputFormat::Json => {
                    let out = json!({ "token": token, "user": body["data"]["user"].clone() });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                // Bare token so it can be captured in a shell variable
                OutputFormat::Text => println!("{}", token),
            }
            Ok(())
        }
    }
}
