//! Donor registration and approval handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bloodshare_core::error::AppError;
use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::donor::{Donor, NewDonor};
use bloodshare_service::{DonorListFilter, DonorSummary};

use crate::dto::request::DonorListQuery;
use crate::dto::response::DonorMessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<NewDonor>, JsonRejection>,
) -> Result<(StatusCode, Json<DonorMessageResponse>), ApiError> {
    let Json(new_donor) = payload?;
    let donor = state.donor_service.register(new_donor).await?;

    Ok((
        StatusCode::CREATED,
        Json(DonorMessageResponse {
            message: "Donor data saved successfully.".to_string(),
            donor,
        }),
    ))
}

/// GET /api/donors/approved
pub async fn list_approved(
    State(state): State<AppState>,
    query: Result<Query<DonorListQuery>, QueryRejection>,
) -> Result<Json<Vec<Donor>>, ApiError> {
    let Query(query) = query?;
    let donors = state.donor_service.list_approved(into_filter(query)?).await?;
    Ok(Json(donors))
}

/// GET /api/donors/pending
pub async fn list_pending(
    State(state): State<AppState>,
    query: Result<Query<DonorListQuery>, QueryRejection>,
) -> Result<Json<Vec<Donor>>, ApiError> {
    let Query(query) = query?;
    let donors = state.donor_service.list_pending(into_filter(query)?).await?;
    Ok(Json(donors))
}

/// PUT /api/donors/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DonorMessageResponse>, ApiError> {
    let donor = state.donor_service.approve(id).await?;
    Ok(Json(DonorMessageResponse {
        message: "Donor approved successfully.".to_string(),
        donor,
    }))
}

/// GET /api/debug/donors
pub async fn summary(State(state): State<AppState>) -> Result<Json<DonorSummary>, ApiError> {
    Ok(Json(state.donor_service.summary().await?))
}

fn into_filter(query: DonorListQuery) -> Result<DonorListFilter, AppError> {
    let blood_group = query
        .blood_group
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<BloodType>)
        .transpose()?;

    Ok(DonorListFilter {
        blood_group,
        city: query.city,
    })
}
