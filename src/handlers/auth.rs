// handlers/auth.rs - signup and login

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::middleware::{ApiResponse, ApiResult};
use crate::schema::{AuthResponse, LoginInput, SignupInput};
use crate::services::AuthService;

fn service(state: &AppState) -> AuthService {
    AuthService::new(state.pool.clone(), state.config.security.clone())
}

/// POST /rpc/signup
pub async fn signup(State(state): State<AppState>, Input(input): Input<SignupInput>) -> ApiResult<AuthResponse> {
    let response = service(&state).signup(input).await?;
    Ok(ApiResponse::created(response))
}

/// POST /rpc/login
pub async fn login(State(state): State<AppState>, Input(input): Input<LoginInput>) -> ApiResult<AuthResponse> {
    let response = service(&state).login(input).await?;
    Ok(ApiResponse::success(response))
}
