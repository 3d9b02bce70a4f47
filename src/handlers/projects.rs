// handlers/projects.rs

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::Project;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::schema::{CreateProjectInput, GetProjectInput, UpdateProjectInput};
use crate::services::ProjectService;

/// POST /rpc/createProject - `created_by` is the caller
pub async fn create_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Input(input): Input<CreateProjectInput>,
) -> ApiResult<Project> {
    let project = ProjectService::new(state.pool).create(input, user.id).await?;
    Ok(ApiResponse::created(project))
}

pub async fn get_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    Ok(ApiResponse::success(ProjectService::new(state.pool).list().await?))
}

pub async fn get_project(State(state): State<AppState>, Input(input): Input<GetProjectInput>) -> ApiResult<Project> {
    Ok(ApiResponse::success(ProjectService::new(state.pool).get(input.id).await?))
}

pub async fn update_project(
    State(state): State<AppState>,
    Input(input): Input<UpdateProjectInput>,
) -> ApiResult<Project> {
    Ok(ApiResponse::success(ProjectService::new(state.pool).update(input).await?))
}
