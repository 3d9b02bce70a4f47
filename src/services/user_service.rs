use sqlx::PgPool;
use tracing::info;

use crate::database::models::User;
use crate::database::Repository;
use crate::error::ApiError;
use crate::schema::CreateUserInput;
use crate::services::TeamService;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a profile without credentials (directory entry)
    pub async fn create(&self, input: CreateUserInput) -> Result<User, ApiError> {
        if let Some(team_id) = input.team_id {
            let team = TeamService::new(self.pool.clone()).repository().select_one(team_id).await?;
            if team.is_none() {
                return Err(ApiError::bad_request(format!("Team with id {} does not exist", team_id)));
            }
        }

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, first_name, last_name, team_id) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(input.email)
        .bind(input.first_name)
        .bind(input.last_name)
        .bind(input.team_id)
        .fetch_one(&self.pool)
        .await?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let users = Repository::<User>::new("users", "User", self.pool.clone()).select_all().await?;
        Ok(users)
    }
}
