// handlers/notes.rs - project notes, public or author-private

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::Note;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::schema::{CreateNoteInput, GetProjectNotesInput, UpdateNoteInput};
use crate::services::NoteService;

pub async fn create_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Input(input): Input<CreateNoteInput>,
) -> ApiResult<Note> {
    let note = NoteService::new(state.pool).create(input, user.id).await?;
    Ok(ApiResponse::created(note))
}

/// GET /rpc/getProjectNotes - another user's private notes are never returned
pub async fn get_project_notes(
    State(state): State<AppState>,
    user: CurrentUser,
    Input(input): Input<GetProjectNotesInput>,
) -> ApiResult<Vec<Note>> {
    let notes = NoteService::new(state.pool).list_visible(input.project_id, user.id).await?;
    Ok(ApiResponse::success(notes))
}

pub async fn update_note(State(state): State<AppState>, Input(input): Input<UpdateNoteInput>) -> ApiResult<Note> {
    Ok(ApiResponse::success(NoteService::new(state.pool).update(input).await?))
}
