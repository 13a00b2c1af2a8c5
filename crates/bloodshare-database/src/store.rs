//! Storage traits consumed by the service layer.
//!
//! Implemented by the sqlx repositories and by the in-memory stores in
//! [`crate::memory`].

use async_trait::async_trait;
use uuid::Uuid;

use bloodshare_core::result::AppResult;
use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::camp::{Camp, CampStatus, NewCamp};
use bloodshare_entity::donor::{CandidateFilter, Donor, DonorCandidate, NewDonor};

/// Optional narrowing applied to donor listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorQuery {
    /// Approval state; `None` lists every donor.
    pub approved: Option<bool>,
    /// Blood group.
    pub blood_group: Option<BloodType>,
    /// City (case-insensitive).
    pub city: Option<String>,
}

/// Donor persistence.
#[async_trait]
pub trait DonorStore: Send + Sync + std::fmt::Debug + 'static {
    /// Select notification candidates. Returns an empty vector when nothing matches.
    async fn find_candidates(&self, filter: &CandidateFilter) -> AppResult<Vec<DonorCandidate>>;

    /// Insert a new, unapproved donor. Duplicate email yields a conflict.
    async fn create(&self, donor: NewDonor) -> AppResult<Donor>;

    /// Find a donor by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donor>>;

    /// List donors, newest first.
    async fn list(&self, query: &DonorQuery) -> AppResult<Vec<Donor>>;

    /// Set the approval flag. Returns `None` if the donor does not exist.
    async fn set_approved(&self, id: Uuid, approved: bool) -> AppResult<Option<Donor>>;

    /// Check backend connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Camp persistence.
#[async_trait]
pub trait CampStore: Send + Sync + std::fmt::Debug + 'static {
    /// List camps by date, optionally narrowed by city and status.
    async fn list(&self, city: Option<&str>, status: Option<CampStatus>) -> AppResult<Vec<Camp>>;

    /// Insert a new upcoming camp.
    async fn create(&self, camp: NewCamp) -> AppResult<Camp>;

    /// Find a camp by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Camp>>;

    /// Update a camp's status. Returns `None` if the camp does not exist.
    async fn update_status(&self, id: Uuid, status: CampStatus) -> AppResult<Option<Camp>>;
}
