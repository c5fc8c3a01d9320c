//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::AppState;

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Whether someone is signed in
    pub session_active: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse<HealthResponse>)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        session_active: state.session.is_authenticated(),
    }))
}
