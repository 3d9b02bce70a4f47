// handlers/teams.rs

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::Team;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schema::CreateTeamInput;
use crate::services::TeamService;

pub async fn create_team(State(state): State<AppState>, Input(input): Input<CreateTeamInput>) -> ApiResult<Team> {
    let team = TeamService::new(state.pool).create(input).await?;
    Ok(ApiResponse::created(team))
}

pub async fn get_teams(State(state): State<AppState>) -> ApiResult<Vec<Team>> {
    Ok(ApiResponse::success(TeamService::new(state.pool).list().await?))
}
