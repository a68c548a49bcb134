//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.test_connection().await {
        Ok(connected) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: if connected { "connected" } else { "disconnected" },
                error: None,
                timestamp: Utc::now(),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "error",
                    database: "disconnected",
                    error: Some(e.message),
                    timestamp: Utc::now(),
                }),
            )
        }
    }
}
