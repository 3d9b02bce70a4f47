// handlers/health.rs - service info and liveness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::database::DatabaseManager;
use crate::middleware::{ApiResponse, ApiResult};

/// GET / - service info
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Sitebook CRM API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Construction CRM backend: companies, projects, tasks, notes and project wiki",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public, pings the database)",
                "rpc": "/rpc/<procedure> (GET for queries, POST for mutations)",
            }
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}

/// GET /rpc/healthcheck - process liveness, no database round trip
pub async fn healthcheck() -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    })))
}
