use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use sitebook_crm::api::AppState;
use sitebook_crm::database::DatabaseManager;
use sitebook_crm::{config, is_development, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    info!("Starting Sitebook CRM API in {:?} mode", config.environment);
    if is_development!() {
        debug!("Configuration: {}", serde_json::to_string(config).unwrap_or_default());
        if config.security.allow_user_id_header {
            warn!("x-user-id header accepted as caller identity");
        }
    }

    let pool = DatabaseManager::connect_lazy(&config.database).context("failed to configure database pool")?;

    if config.database.run_migrations {
        // The server still comes up; /health reports the database as degraded
        if let Err(e) = DatabaseManager::migrate(&pool).await {
            warn!("Migrations not applied: {}", e);
        }
    }

    let app = router::app(AppState::new(pool, config.clone()));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Sitebook CRM API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
