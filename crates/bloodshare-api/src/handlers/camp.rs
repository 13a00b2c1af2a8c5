//! Camp handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bloodshare_entity::camp::{Camp, NewCamp};

use crate::dto::request::CampListQuery;
use crate::dto::response::CampMessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/camps
pub async fn list_camps(
    State(state): State<AppState>,
    query: Result<Query<CampListQuery>, QueryRejection>,
) -> Result<Json<Vec<Camp>>, ApiError> {
    let Query(query) = query?;
    let status = query.status()?;
    let camps = state.camp_service.list(query.city(), status).await?;
    Ok(Json(camps))
}

/// POST /api/camps
pub async fn create_camp(
    State(state): State<AppState>,
    payload: Result<Json<NewCamp>, JsonRejection>,
) -> Result<(StatusCode, Json<Camp>), ApiError> {
    let Json(new_camp) = payload?;
    let camp = state.camp_service.create(new_camp).await?;
    Ok((StatusCode::CREATED, Json(camp)))
}

/// PUT /api/camps/{id}/complete
pub async fn complete_camp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampMessageResponse>, ApiError> {
    let camp = state.camp_service.complete(id).await?;
    Ok(Json(CampMessageResponse {
        message: "Camp marked as completed.".to_string(),
        camp,
    }))
}
