//! Donor projection used by the emergency fan-out.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use bloodshare_core::config::CandidateFilterPolicy;

use crate::blood_type::BloodType;
use crate::donor::model::Donor;

/// The fields of a donor record needed to notify them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DonorCandidate {
    /// Donor identifier.
    pub id: Uuid,
    /// Full name.
    pub full_name: String,
    /// Blood group.
    pub blood_group: BloodType,
    /// Contact phone.
    pub phone_number: String,
    /// Contact email.
    pub email: String,
    /// City of residence.
    pub city: String,
    /// Approval flag.
    pub is_approved: bool,
    /// Emergency opt-in flag.
    pub emergency_availability: bool,
}

impl From<&Donor> for DonorCandidate {
    fn from(d: &Donor) -> Self {
        Self {
            id: d.id,
            full_name: d.full_name.clone(),
            blood_group: d.blood_group,
            phone_number: d.phone_number.clone(),
            email: d.email.clone(),
            city: d.city.clone(),
            is_approved: d.is_approved,
            emergency_availability: d.emergency_availability,
        }
    }
}

/// Predicate handed to the donor store to select candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Required approval state.
    pub approved: bool,
    /// Required emergency opt-in state, if constrained.
    pub emergency_available: Option<bool>,
    /// Required city (case-insensitive), if constrained.
    pub city: Option<String>,
}

impl CandidateFilter {
    /// All approved donors.
    pub fn approved() -> Self {
        Self {
            approved: true,
            emergency_available: None,
            city: None,
        }
    }

    /// Build the filter a policy prescribes for a request in `city`.
    pub fn for_policy(policy: CandidateFilterPolicy, city: &str) -> Self {
        let base = Self::approved();
        match policy {
            CandidateFilterPolicy::ApprovedOnly => base,
            CandidateFilterPolicy::EmergencyAvailable => Self {
                emergency_available: Some(true),
                ..base
            },
            CandidateFilterPolicy::SameCity => Self {
                city: Some(city.to_string()),
                ..base
            },
            CandidateFilterPolicy::SameCityEmergencyAvailable => Self {
                emergency_available: Some(true),
                city: Some(city.to_string()),
                ..base
            },
        }
    }

    /// Evaluate the predicate in memory.
    pub fn matches(&self, candidate: &DonorCandidate) -> bool {
        candidate.is_approved == self.approved
            && self
                .emergency_available
                .is_none_or(|wanted| candidate.emergency_availability == wanted)
            && self
                .city
                .as_deref()
                .is_none_or(|city| candidate.city.eq_ignore_ascii_case(city.trim()))
    }
}
