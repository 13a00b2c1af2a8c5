//! Hospitals near a point.

use std::sync::Arc;

use bloodshare_core::error::AppError;
use bloodshare_entity::hospital::{GeoPoint, Hospital, NearbyHospital};

use super::catalog;
use super::distance::haversine_km;

/// Radius used when the caller gives none.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Looks up hospitals by distance from a coordinate.
#[derive(Debug, Clone)]
pub struct HospitalService {
    hospitals: Arc<[Hospital]>,
}

impl Default for HospitalService {
    fn default() -> Self {
        Self::with_catalog(catalog::builtin())
    }
}

impl HospitalService {
    /// A service over the built-in catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A service over a custom catalogue.
    pub fn with_catalog(hospitals: Vec<Hospital>) -> Self {
        Self {
            hospitals: hospitals.into(),
        }
    }

    /// Every hospital in the catalogue.
    pub fn all(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Hospitals within `radius_km` of `(lat, lon)`, nearest first.
    pub fn nearby(
        &self,
        lat: f64,
        lon: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<NearbyHospital>, AppError> {
        let origin = GeoPoint::new(lat, lon)?;
        let radius = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AppError::validation(format!(
                "Radius must be a positive number of kilometres, got {radius}"
            )));
        }

        let mut found: Vec<NearbyHospital> = self
            .hospitals
            .iter()
            .map(|h| (h, haversine_km(origin, h.location)))
            .filter(|(_, d)| *d <= radius)
            .map(|(h, d)| NearbyHospital {
                hospital: h.clone(),
                distance_km: (d * 10.0).round() / 10.0,
            })
            .collect();

        found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(found)
    }
}
