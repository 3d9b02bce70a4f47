use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One saved version of a project's wiki page. Saves never overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WikiEntry {
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}
