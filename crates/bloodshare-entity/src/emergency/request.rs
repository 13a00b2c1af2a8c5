//! Emergency request and urgency level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use validator::Validate;

use crate::blood_type::BloodType;

/// How soon the blood is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Within 2 hours.
    Critical,
    /// Within 6 hours.
    Urgent,
    /// Within 24 hours.
    Moderate,
}

impl UrgencyLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Moderate => "moderate",
        }
    }

    /// Human-facing label used in outgoing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL (Within 2 hours)",
            Self::Urgent => "URGENT (Within 6 hours)",
            Self::Moderate => "MODERATE (Within 24 hours)",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = bloodshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "urgent" => Ok(Self::Urgent),
            "moderate" => Ok(Self::Moderate),
            _ => Err(bloodshare_core::AppError::validation(format!(
                "Invalid urgency level: '{s}'. Expected one of: critical, urgent, moderate"
            ))),
        }
    }
}

/// A validated emergency blood request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyRequest {
    /// Patient name.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub patient_name: String,
    /// Person to contact.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub contact_person: String,
    /// Contact phone.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub phone: String,
    /// Requested blood type.
    pub blood_group: BloodType,
    /// Units needed (positive).
    #[validate(range(min = 1, message = "At least one unit must be requested"))]
    pub units_needed: u32,
    /// Hospital name/address.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub hospital: String,
    /// City.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub city: String,
    /// Urgency.
    pub urgency_level: UrgencyLevel,
    /// Free-text notes.
    pub additional_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_parse_and_label() {
        let level: UrgencyLevel = " Critical ".parse().expect("should parse");
        assert_eq!(level, UrgencyLevel::Critical);
        assert_eq!(level.label(), "CRITICAL (Within 2 hours)");
        assert!("soon".parse::<UrgencyLevel>().is_err());
    }
}
