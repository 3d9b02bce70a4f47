use sqlx::PgPool;
use tracing::info;

use crate::database::models::Note;
use crate::database::UpdateBuilder;
use crate::error::ApiError;
use crate::schema::{CreateNoteInput, UpdateNoteInput};

pub struct NoteService {
    pool: PgPool,
}

impl NoteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateNoteInput, created_by: i32) -> Result<Note, ApiError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (content, is_private, project_id, created_by) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(input.content)
        .bind(input.is_private)
        .bind(input.project_id)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        info!("User {} added note {} to project {}", created_by, note.id, note.project_id);
        Ok(note)
    }

    /// Public notes plus the viewer's own private ones, oldest first
    pub async fn list_visible(&self, project_id: i32, viewer: i32) -> Result<Vec<Note>, ApiError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes
             WHERE project_id = $1 AND (is_private = FALSE OR created_by = $2)
             ORDER BY created_at ASC, id ASC",
        )
        .bind(project_id)
        .bind(viewer)
        .fetch_all(&self.pool)
        .await?;
        debug_assert!(notes.iter().all(|note| note.is_visible_to(viewer)));
        Ok(notes)
    }

    pub async fn update(&self, input: UpdateNoteInput) -> Result<Note, ApiError> {
        let mut update = UpdateBuilder::new("notes", "Note")?;
        update.set("content", input.content)?;

        let note: Note = update.execute(input.id, &self.pool).await?;
        info!("Updated note {}", note.id);
        Ok(note)
    }
}
