pub mod format;
pub mod input;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

pub use input::Input;

/// Shared by every handler through axum `State`
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
