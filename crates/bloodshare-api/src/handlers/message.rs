//! Messaging connectivity check.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::TestMessageRequest;
use crate::dto::response::TestMessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/test-message
pub async fn send_test(
    State(state): State<AppState>,
    payload: Result<Json<TestMessageRequest>, JsonRejection>,
) -> Result<Json<TestMessageResponse>, ApiError> {
    let Json(req) = payload?;
    let receipt = state.emergency_service.send_test_message(&req.phone).await?;

    Ok(Json(TestMessageResponse {
        success: true,
        message: "Test message sent successfully!".to_string(),
        sid: receipt.id,
    }))
}
