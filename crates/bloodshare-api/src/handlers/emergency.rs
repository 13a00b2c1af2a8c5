//! Emergency broadcast handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::EmergencyRequestBody;
use crate::dto::response::EmergencyResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/emergency
pub async fn create_emergency(
    State(state): State<AppState>,
    payload: Result<Json<EmergencyRequestBody>, JsonRejection>,
) -> Result<Json<EmergencyResponse>, ApiError> {
    let Json(body) = payload?;
    let request = body.into_request()?;

    let result = state.emergency_service.broadcast(&request).await?;
    Ok(Json(result.into()))
}
