use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::types::{AppState, HealthResponse};

/// Health check endpoint reflecting gateway readiness: 200 once the gateway
/// is presumed able to serve traffic, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.gateway.is_ready() {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                gateway: "running".to_string(),
                port: Some(state.config.gateway_port),
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "starting".to_string(),
                gateway: "initializing".to_string(),
                port: None,
            }),
        )
    }
}
