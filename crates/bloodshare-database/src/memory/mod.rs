//! In-memory store implementations.
//!
//! Used for local development without PostgreSQL and as the backing
//! store for service and router tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloodshare_core::error::AppError;
use bloodshare_core::result::AppResult;
use bloodshare_entity::camp::{Camp, CampStatus, NewCamp};
use bloodshare_entity::donor::{CandidateFilter, Donor, DonorCandidate, NewDonor};

use crate::store::{CampStore, DonorQuery, DonorStore};

/// Donor store backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryDonorStore {
    donors: RwLock<HashMap<Uuid, Donor>>,
}

impl MemoryDonorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed donor, bypassing registration rules.
    pub async fn insert(&self, donor: Donor) {
        self.donors.write().await.insert(donor.id, donor);
    }
}

#[async_trait]
impl DonorStore for MemoryDonorStore {
    async fn find_candidates(&self, filter: &CandidateFilter) -> AppResult<Vec<DonorCandidate>> {
        let donors = self.donors.read().await;
        let mut matched: Vec<&Donor> = donors
            .values()
            .filter(|d| filter.matches(&DonorCandidate::from(*d)))
            .collect();
        matched.sort_by_key(|d| d.created_at);
        Ok(matched.into_iter().map(DonorCandidate::from).collect())
    }

    async fn create(&self, donor: NewDonor) -> AppResult<Donor> {
        let mut donors = self.donors.write().await;
        if donors
            .values()
            .any(|d| d.email.eq_ignore_ascii_case(&donor.email))
        {
            return Err(AppError::conflict(format!(
                "A donor with email '{}' already exists",
                donor.email
            )));
        }
        let donor = Donor::from_new(donor);
        donors.insert(donor.id, donor.clone());
        Ok(donor)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donor>> {
        Ok(self.donors.read().await.get(&id).cloned())
    }

    async fn list(&self, query: &DonorQuery) -> AppResult<Vec<Donor>> {
        let donors = self.donors.read().await;
        let mut listed: Vec<Donor> = donors
            .values()
            .filter(|d| query.approved.is_none_or(|a| d.is_approved == a))
            .filter(|d| query.blood_group.is_none_or(|bg| d.blood_group == bg))
            .filter(|d| {
                query
                    .city
                    .as_deref()
                    .is_none_or(|c| d.city.eq_ignore_ascii_case(c.trim()))
            })
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn set_approved(&self, id: Uuid, approved: bool) -> AppResult<Option<Donor>> {
        let mut donors = self.donors.write().await;
        Ok(donors.get_mut(&id).map(|d| {
            d.is_approved = approved;
            d.updated_at = Utc::now();
            d.clone()
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Camp store backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryCampStore {
    camps: RwLock<HashMap<Uuid, Camp>>,
}

impl MemoryCampStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampStore for MemoryCampStore {
    async fn list(&self, city: Option<&str>, status: Option<CampStatus>) -> AppResult<Vec<Camp>> {
        let camps = self.camps.read().await;
        let mut listed: Vec<Camp> = camps
            .values()
            .filter(|c| city.is_none_or(|city| c.city.eq_ignore_ascii_case(city.trim())))
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(listed)
    }

    async fn create(&self, camp: NewCamp) -> AppResult<Camp> {
        let camp = Camp::from_new(camp);
        self.camps.write().await.insert(camp.id, camp.clone());
        Ok(camp)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Camp>> {
        Ok(self.camps.read().await.get(&id).cloned())
    }

    async fn update_status(&self, id: Uuid, status: CampStatus) -> AppResult<Option<Camp>> {
        let mut camps = self.camps.write().await;
        Ok(camps.get_mut(&id).map(|c| {
            c.status = status;
            c.updated_at = Utc::now();
            c.clone()
        }))
    }
}
