//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use bloodshare_core::error::AppError;
use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::camp::CampStatus;
use bloodshare_entity::emergency::{EmergencyRequest, UrgencyLevel};

/// Message returned when a required emergency field is absent.
pub const MISSING_FIELDS: &str = "Missing required fields.";

/// Raw emergency request body.
///
/// Every field is optional here so that absence can be reported with
/// one uniform message. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRequestBody {
    /// Patient name.
    pub patient_name: Option<String>,
    /// Contact person.
    pub contact_person: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Requested blood type (`O-`, `AB+`, ...).
    pub blood_group: Option<String>,
    /// Units needed; a number or a numeric string.
    pub units_needed: Option<Value>,
    /// Hospital.
    pub hospital: Option<String>,
    /// City.
    pub city: Option<String>,
    /// `critical`, `urgent`, or `moderate`.
    pub urgency_level: Option<String>,
    /// Optional notes.
    pub additional_info: Option<String>,
}

impl EmergencyRequestBody {
    /// Check presence, then parse each field into a typed request.
    pub fn into_request(self) -> Result<EmergencyRequest, AppError> {
        let (
            Some(patient_name),
            Some(contact_person),
            Some(phone),
            Some(blood_group),
            Some(units),
            Some(hospital),
            Some(city),
            Some(urgency),
        ) = (
            present(self.patient_name),
            present(self.contact_person),
            present(self.phone),
            present(self.blood_group),
            self.units_needed.as_ref().and_then(units_value),
            present(self.hospital),
            present(self.city),
            present(self.urgency_level),
        )
        else {
            return Err(AppError::validation(MISSING_FIELDS));
        };

        let units_needed = units?;
        if units_needed == 0 {
            return Err(AppError::validation(MISSING_FIELDS));
        }

        Ok(EmergencyRequest {
            patient_name,
            contact_person,
            phone,
            blood_group: blood_group.parse::<BloodType>()?,
            units_needed,
            hospital,
            city,
            urgency_level: urgency.parse::<UrgencyLevel>()?,
            additional_info: present(self.additional_info),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `None` when absent; `Some(Err)` when present but not a whole number.
fn units_value(value: &Value) -> Option<Result<u32, AppError>> {
    let invalid = || AppError::validation("unitsNeeded must be a positive whole number");
    match value {
        Value::Null => None,
        Value::Number(n) => Some(
            n.as_u64()
                .and_then(|u| u32::try_from(u).ok())
                .ok_or_else(invalid),
        ),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().parse::<u32>().map_err(|_| invalid())),
        _ => Some(Err(invalid())),
    }
}

/// Query parameters for donor listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorListQuery {
    /// Blood group filter.
    #[serde(alias = "blood_group")]
    pub blood_group: Option<String>,
    /// City filter.
    pub city: Option<String>,
}

/// Query parameters for camp listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampListQuery {
    /// City filter; `All Cities` or empty means no filter.
    pub city: Option<String>,
    /// `Upcoming` or `Completed`.
    pub status: Option<String>,
}

impl CampListQuery {
    /// City filter with the catch-all values removed.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all cities"))
    }

    /// Parsed status filter.
    pub fn status(&self) -> Result<Option<CampStatus>, AppError> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}

/// Query parameters for the nearby-hospital search.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    #[serde(alias = "lng")]
    pub lon: f64,
    /// Search radius in kilometres.
    #[serde(alias = "radiusKm", alias = "radius")]
    pub radius_km: Option<f64>,
}

/// Body of a connectivity test message.
#[derive(Debug, Clone, Deserialize)]
pub struct TestMessageRequest {
    /// Destination phone number.
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> EmergencyRequestBody {
        serde_json::from_value(value).unwrap()
    }

    fn full() -> Value {
        json!({
            "patientName": "Meera",
            "contactPerson": "Arjun",
            "phone": "9876543210",
            "bloodGroup": "b+",
            "unitsNeeded": "3",
            "hospital": "City Hospital",
            "city": "Pune",
            "urgencyLevel": "critical"
        })
    }

    #[test]
    fn test_full_body_parses() {
        let req = body(full()).into_request().unwrap();
        assert_eq!(req.blood_group, BloodType::BPos);
        assert_eq!(req.units_needed, 3);
        assert_eq!(req.urgency_level, UrgencyLevel::Critical);
        assert!(req.additional_info.is_none());
    }

    #[test]
    fn test_missing_or_empty_field() {
        let mut value = full();
        value["hospital"] = json!("  ");
        let err = body(value).into_request().unwrap_err();
        assert_eq!(err.message, MISSING_FIELDS);

        let mut value = full();
        value.as_object_mut().unwrap().remove("unitsNeeded");
        assert_eq!(body(value).into_request().unwrap_err().message, MISSING_FIELDS);
    }

    #[test]
    fn test_invalid_values() {
        let mut value = full();
        value["bloodGroup"] = json!("C+");
        assert!(body(value).into_request().is_err());

        let mut value = full();
        value["unitsNeeded"] = json!(-2);
        assert!(body(value).into_request().is_err());

        let mut value = full();
        value["unitsNeeded"] = json!(0);
        assert_eq!(body(value).into_request().unwrap_err().message, MISSING_FIELDS);
    }

    #[test]
    fn test_camp_query_all_cities() {
        let q = CampListQuery {
            city: Some("All Cities".to_string()),
            status: Some("completed".to_string()),
        };
        assert!(q.city().is_none());
        assert_eq!(q.status().unwrap(), Some(CampStatus::Completed));
    }
}
