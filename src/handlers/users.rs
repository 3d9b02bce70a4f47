// handlers/users.rs - directory users (profiles without credentials)

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schema::CreateUserInput;
use crate::services::UserService;

pub async fn create_user(State(state): State<AppState>, Input(input): Input<CreateUserInput>) -> ApiResult<User> {
    let user = UserService::new(state.pool).create(input).await?;
    Ok(ApiResponse::created(user))
}

pub async fn get_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::success(UserService::new(state.pool).list().await?))
}
