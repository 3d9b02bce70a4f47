// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::auth::AuthError;
use crate::database::DatabaseError;

/// Per-field validation messages, keyed by input field name
pub type FieldErrors = BTreeMap<String, String>;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<FieldErrors>,
    },
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::InvalidJson(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "success": false,
            "error": self.message(),
            "code": self.error_code()
        });

        if let ApiError::ValidationError {
            field_errors: Some(field_errors),
            ..
        } = self
        {
            response["field_errors"] = json!(field_errors);
        }

        response
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(message: impl Into<String>, field_errors: Option<FieldErrors>) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            DatabaseError::ForeignKeyViolation { constraint } => {
                tracing::warn!("Foreign key violation: {:?}", constraint);
                ApiError::bad_request(match constraint {
                    Some(name) => format!("Referenced record does not exist ({})", name),
                    None => "Referenced record does not exist".to_string(),
                })
            }
            DatabaseError::UniqueViolation { constraint } => {
                tracing::warn!("Unique violation: {:?}", constraint);
                ApiError::conflict("A record with the same unique value already exists")
            }
            DatabaseError::ConnectionError(msg) => {
                tracing::error!("Database connection error: {}", msg);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            DatabaseError::QueryError(msg) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Database query error: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
            DatabaseError::MigrationError(msg) => {
                tracing::error!("Migration error: {}", msg);
                ApiError::service_unavailable("Service is being updated, please try again later")
            }
            DatabaseError::ConfigMissing(name) => {
                tracing::error!("Missing database configuration: {}", name);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::from(err).into()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(msg) => ApiError::unauthorized(msg),
            other => {
                tracing::error!("Authentication subsystem error: {}", other);
                ApiError::internal_server_error("Authentication is temporarily unavailable")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
