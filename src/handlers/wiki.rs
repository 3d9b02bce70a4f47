// handlers/wiki.rs - append-only project wiki

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::WikiEntry;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::schema::{CreateProjectWikiInput, GetProjectWikiHistoryInput};
use crate::services::WikiService;

pub async fn create_project_wiki(
    State(state): State<AppState>,
    user: CurrentUser,
    Input(input): Input<CreateProjectWikiInput>,
) -> ApiResult<WikiEntry> {
    let entry = WikiService::new(state.pool).create(input, user.id).await?;
    Ok(ApiResponse::created(entry))
}

pub async fn get_project_wiki_history(
    State(state): State<AppState>,
    Input(input): Input<GetProjectWikiHistoryInput>,
) -> ApiResult<Vec<WikiEntry>> {
    Ok(ApiResponse::success(WikiService::new(state.pool).history(input.project_id).await?))
}
