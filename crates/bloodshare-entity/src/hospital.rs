//! Hospitals and geographic coordinates.

use serde::{Deserialize, Serialize};

use bloodshare_core::AppError;

/// A WGS-84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, -90..=90.
    pub lat: f64,
    /// Longitude, -180..=180.
    pub lon: f64,
}

impl GeoPoint {
    /// Build a point, rejecting out-of-range or non-finite coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, AppError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::validation(format!("Invalid latitude: {lat}")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::validation(format!("Invalid longitude: {lon}")));
        }
        Ok(Self { lat, lon })
    }
}

/// A hospital with a blood bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    /// Hospital name.
    pub name: String,
    /// City.
    pub city: String,
    /// Street address.
    pub address: String,
    /// Blood bank phone, where published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Location.
    pub location: GeoPoint,
}

/// A hospital paired with its distance from a query point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyHospital {
    /// The hospital.
    #[serde(flatten)]
    pub hospital: Hospital,
    /// Great-circle distance in kilometres, rounded to 0.1 km.
    pub distance_km: f64,
}
