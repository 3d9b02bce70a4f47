// handlers/companies.rs

use axum::extract::State;

use crate::api::{AppState, Input};
use crate::database::models::Company;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schema::CreateCompanyInput;
use crate::services::CompanyService;

pub async fn create_company(
    State(state): State<AppState>,
    Input(input): Input<CreateCompanyInput>,
) -> ApiResult<Company> {
    let company = CompanyService::new(state.pool).create(input).await?;
    Ok(ApiResponse::created(company))
}

pub async fn get_companies(State(state): State<AppState>) -> ApiResult<Vec<Company>> {
    Ok(ApiResponse::success(CompanyService::new(state.pool).list().await?))
}
