//! Health check and banner handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /
pub async fn banner() -> &'static str {
    "BloodShare Backend Server is running!"
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database_ok = state.donor_service.health_check().await.unwrap_or(false);
    let (whatsapp, email) = state.emergency_service.channels_enabled();

    let channel = |enabled: bool| if enabled { "enabled" } else { "disabled" }.to_string();

    Json(ApiResponse::ok(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database: if database_ok { "connected" } else { "unreachable" }.to_string(),
        whatsapp: channel(whatsapp),
        email: channel(email),
    }))
}
