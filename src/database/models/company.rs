use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Organization that owns projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
