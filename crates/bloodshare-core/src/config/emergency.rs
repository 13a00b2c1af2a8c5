//! Emergency broadcast configuration.

use serde::{Deserialize, Serialize};

/// Which approved donors are selected as candidates for an emergency request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateFilterPolicy {
    /// Every approved donor, nationwide.
    #[default]
    ApprovedOnly,
    /// Approved donors who opted in to emergency contact.
    EmergencyAvailable,
    /// Approved donors in the request's city.
    SameCity,
    /// Approved, emergency-available donors in the request's city.
    SameCityEmergencyAvailable,
}

/// Emergency fan-out settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyConfig {
    /// Candidate selection policy.
    #[serde(default)]
    pub filter: CandidateFilterPolicy,
    /// Upper bound on candidates dispatched concurrently.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_dispatches: usize,
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            filter: CandidateFilterPolicy::default(),
            max_concurrent_dispatches: default_max_concurrent(),
        }
    }
}

fn default_max_concurrent() -> usize {
    16
}
