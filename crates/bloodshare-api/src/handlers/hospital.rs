//! Nearby hospital handler.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use bloodshare_entity::hospital::GeoPoint;
use bloodshare_service::hospital::service::DEFAULT_RADIUS_KM;

use crate::dto::request::NearbyQuery;
use crate::dto::response::NearbyHospitalsResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hospitals/nearby?lat=&lon=&radius_km=
pub async fn nearby(
    State(state): State<AppState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<NearbyHospitalsResponse>, ApiError> {
    let Query(query) = query?;
    let hospitals = state
        .hospital_service
        .nearby(query.lat, query.lon, query.radius_km)?;

    Ok(Json(NearbyHospitalsResponse {
        origin: GeoPoint {
            lat: query.lat,
            lon: query.lon,
        },
        radius_km: query.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
        hospitals,
    }))
}
