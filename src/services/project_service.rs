use sqlx::PgPool;
use tracing::info;

use crate::api::format::number_to_decimal;
use crate::database::models::{Project, ProjectRow};
use crate::database::{Repository, UpdateBuilder};
use crate::error::ApiError;
use crate::schema::{CreateProjectInput, UpdateProjectInput};

pub struct ProjectService {
    pool: PgPool,
}

impl ProjectService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repository(&self) -> Repository<ProjectRow> {
        Repository::new("projects", "Project", self.pool.clone())
    }

    pub async fn create(&self, input: CreateProjectInput, created_by: i32) -> Result<Project, ApiError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "INSERT INTO projects
                 (name, description, status, estimated_value, start_date, end_date, company_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(input.name)
        .bind(input.description)
        .bind(input.status)
        .bind(input.estimated_value.and_then(number_to_decimal))
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.company_id)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        info!("User {} created project {}", created_by, row.id);
        Ok(row.into())
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        let rows = self.repository().select_all().await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Project, ApiError> {
        Ok(self.repository().select_404(id).await?.into())
    }

    pub async fn update(&self, input: UpdateProjectInput) -> Result<Project, ApiError> {
        let mut update = UpdateBuilder::new("projects", "Project")?;
        update
            .set_if("name", input.name)?
            .set_if("description", input.description)?
            .set_if("status", input.status)?
            .set_if("estimated_value", input.estimated_value.map(|v| v.and_then(number_to_decimal)))?
            .set_if("start_date", input.start_date)?
            .set_if("end_date", input.end_date)?
            .set_if("company_id", input.company_id)?;

        let row: ProjectRow = update.execute(input.id, &self.pool).await?;
        info!("Updated project {}", row.id);
        Ok(row.into())
    }
}
