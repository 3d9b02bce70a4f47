// handlers/tasks.rs

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::Task;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::schema::{CreateTaskInput, GetProjectTasksInput, UpdateTaskInput};
use crate::services::TaskService;

pub async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Input(input): Input<CreateTaskInput>,
) -> ApiResult<Task> {
    let task = TaskService::new(state.pool).create(input, user.id).await?;
    Ok(ApiResponse::created(task))
}

pub async fn get_project_tasks(
    State(state): State<AppState>,
    Input(input): Input<GetProjectTasksInput>,
) -> ApiResult<Vec<Task>> {
    Ok(ApiResponse::success(TaskService::new(state.pool).list_for_project(input.project_id).await?))
}

pub async fn update_task(State(state): State<AppState>, Input(input): Input<UpdateTaskInput>) -> ApiResult<Task> {
    Ok(ApiResponse::success(TaskService::new(state.pool).update(input).await?))
}
