use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Credential row, 1:1 with a user profile. Never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct AuthUser {
    pub id: i32,
    pub user_id: i32,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
