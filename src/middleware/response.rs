use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::error::ApiError;

/// `{"success": true, "data": ...}` body shared by every procedure
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    data: &'a T,
}

/// Successful procedure result; serialized inside the success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self { data, status }
    }

    /// 201, used by every create procedure
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let envelope = Envelope {
            success: true,
            data: &self.data,
        };

        match serde_json::to_value(&envelope) {
            Ok(body) => (self.status, Json(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                ApiError::internal_server_error("Failed to serialize response data").into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
