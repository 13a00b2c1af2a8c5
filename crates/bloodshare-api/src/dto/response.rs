//! Response DTOs.

use serde::{Deserialize, Serialize};

use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::camp::Camp;
use bloodshare_entity::donor::Donor;
use bloodshare_entity::emergency::EmergencyResult;
use bloodshare_entity::hospital::{GeoPoint, NearbyHospital};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Result of an emergency broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyResponse {
    /// Summary line.
    pub message: String,
    /// Full aggregate.
    pub results: EmergencyResult,
}

impl From<EmergencyResult> for EmergencyResponse {
    fn from(results: EmergencyResult) -> Self {
        Self {
            message: format!(
                "Emergency request sent successfully. {}/{} donors notified.",
                results.donors_notified(),
                results.total_candidates
            ),
            results,
        }
    }
}

/// A donor together with a status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorMessageResponse {
    /// Message.
    pub message: String,
    /// The affected donor.
    pub donor: Donor,
}

/// A camp together with a status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampMessageResponse {
    /// Message.
    pub message: String,
    /// The affected camp.
    pub camp: Camp,
}

/// Compatibility lookup for one blood type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    /// The requested type.
    pub blood_group: BloodType,
    /// Types that can donate to it.
    pub compatible_donors: Vec<BloodType>,
    /// Types it can donate to.
    pub can_donate_to: Vec<BloodType>,
}

/// Hospitals near a point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyHospitalsResponse {
    /// Query point.
    pub origin: GeoPoint,
    /// Radius searched.
    pub radius_km: f64,
    /// Matches, nearest first.
    pub hospitals: Vec<NearbyHospital>,
}

/// Test message outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestMessageResponse {
    /// Always `true`; failures are returned as errors.
    pub success: bool,
    /// Message.
    pub message: String,
    /// Provider message id.
    pub sid: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since start.
    pub uptime_seconds: u64,
    /// Donor store reachability.
    pub database: String,
    /// WhatsApp channel state.
    pub whatsapp: String,
    /// Email channel state.
    pub email: String,
}
