use sqlx::PgPool;
use tracing::info;

use crate::database::models::Team;
use crate::database::Repository;
use crate::error::ApiError;
use crate::schema::CreateTeamInput;

pub struct TeamService {
    pool: PgPool,
}

impl TeamService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn repository(&self) -> Repository<Team> {
        Repository::new("teams", "Team", self.pool.clone())
    }

    pub async fn create(&self, input: CreateTeamInput) -> Result<Team, ApiError> {
        let team = sqlx::query_as::<_, Team>("INSERT INTO teams (name, description) VALUES ($1, $2) RETURNING *")
            .bind(input.name)
            .bind(input.description)
            .fetch_one(&self.pool)
            .await?;

        info!("Created team {}", team.id);
        Ok(team)
    }

    pub async fn list(&self) -> Result<Vec<Team>, ApiError> {
        Ok(self.repository().select_all().await?)
    }
}
