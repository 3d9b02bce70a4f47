use sqlx::PgPool;
use tracing::info;

use crate::database::models::WikiEntry;
use crate::database::{Repository, SortDirection};
use crate::error::ApiError;
use crate::schema::CreateProjectWikiInput;

pub struct WikiService {
    pool: PgPool,
}

impl WikiService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a new version. Saves to one project are serialized on the
    /// project row, so each reads the previous save's MAX(version).
    pub async fn create(&self, input: CreateProjectWikiInput, created_by: i32) -> Result<WikiEntry, ApiError> {
        let mut tx = self.pool.begin().await?;

        // No row to lock for a missing project; the insert then fails its FK
        sqlx::query("SELECT 1 FROM projects WHERE id = $1 FOR UPDATE")
            .bind(input.project_id)
            .fetch_optional(&mut *tx)
            .await?;

        let entry = sqlx::query_as::<_, WikiEntry>(
            "INSERT INTO project_wiki (project_id, title, content, version, created_by)
             SELECT $1, $2, $3, COALESCE(MAX(version), 0) + 1, $4
             FROM project_wiki
             WHERE project_id = $1
             RETURNING *",
        )
        .bind(input.project_id)
        .bind(input.title)
        .bind(input.content)
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Project {} wiki saved as version {}", entry.project_id, entry.version);
        Ok(entry)
    }

    /// Newest version first
    pub async fn history(&self, project_id: i32) -> Result<Vec<WikiEntry>, ApiError> {
        let entries = Repository::<WikiEntry>::new("project_wiki", "Wiki entry", self.pool.clone())
            .ordered_by("version", SortDirection::Desc)
            .select_where("project_id", project_id)
            .await?;
        Ok(entries)
    }
}
