//! Donor registry operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use bloodshare_core::error::AppError;
use bloodshare_database::store::{DonorQuery, DonorStore};
use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::donor::{Donor, NewDonor};
use bloodshare_entity::validation::into_app_error;

/// Optional narrowing for donor listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonorListFilter {
    /// Blood group.
    pub blood_group: Option<BloodType>,
    /// City.
    pub city: Option<String>,
}

/// One row of the donor overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDigest {
    /// Donor id.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Phone as registered.
    pub phone: String,
    /// City.
    pub city: String,
    /// Blood group.
    pub blood_group: BloodType,
    /// Approval flag.
    pub approved: bool,
    /// Emergency opt-in.
    pub emergency_available: bool,
}

/// Counts plus a digest of every donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorSummary {
    /// All donors.
    pub total: usize,
    /// Approved donors.
    pub approved: usize,
    /// Every donor, newest first.
    pub donors: Vec<DonorDigest>,
}

/// Manages donor registration and the approval workflow.
#[derive(Debug, Clone)]
pub struct DonorService {
    /// Donor storage.
    donors: Arc<dyn DonorStore>,
}

impl DonorService {
    /// Creates a new donor service.
    pub fn new(donors: Arc<dyn DonorStore>) -> Self {
        Self { donors }
    }

    /// Validate and store a new registration. The donor starts unapproved.
    pub async fn register(&self, new_donor: NewDonor) -> Result<Donor, AppError> {
        new_donor.validate().map_err(into_app_error)?;
        let donor = self.donors.create(normalize(new_donor)).await?;

        info!(
            donor_id = %donor.id,
            blood_group = %donor.blood_group,
            city = %donor.city,
            "Donor registered"
        );

        Ok(donor)
    }

    /// Approved donors, newest first.
    pub async fn list_approved(&self, filter: DonorListFilter) -> Result<Vec<Donor>, AppError> {
        self.list(Some(true), filter).await
    }

    /// Donors awaiting approval, newest first.
    pub async fn list_pending(&self, filter: DonorListFilter) -> Result<Vec<Donor>, AppError> {
        self.list(Some(false), filter).await
    }

    /// Approve a donor, making them eligible for emergency broadcasts.
    pub async fn approve(&self, id: Uuid) -> Result<Donor, AppError> {
        let donor = self
            .donors
            .set_approved(id, true)
            .await?
            .ok_or_else(|| AppError::not_found("Donor not found."))?;

        info!(donor_id = %id, "Donor approved");
        Ok(donor)
    }

    /// Get a single donor.
    pub async fn get(&self, id: Uuid) -> Result<Donor, AppError> {
        self.donors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Donor not found."))
    }

    /// Totals plus a digest of every donor.
    pub async fn summary(&self) -> Result<DonorSummary, AppError> {
        let all = self.donors.list(&DonorQuery::default()).await?;
        let approved = all.iter().filter(|d| d.is_approved).count();

        Ok(DonorSummary {
            total: all.len(),
            approved,
            donors: all
                .into_iter()
                .map(|d| DonorDigest {
                    id: d.id,
                    name: d.full_name,
                    phone: d.phone_number,
                    city: d.city,
                    blood_group: d.blood_group,
                    approved: d.is_approved,
                    emergency_available: d.emergency_availability,
                })
                .collect(),
        })
    }

    /// Whether the donor store is reachable.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.donors.health_check().await
    }

    async fn list(&self, approved: Option<bool>, filter: DonorListFilter) -> Result<Vec<Donor>, AppError> {
        let query = DonorQuery {
            approved,
            blood_group: filter.blood_group,
            city: filter.city.filter(|c| !c.trim().is_empty()),
        };
        self.donors.list(&query).await
    }
}

fn normalize(mut donor: NewDonor) -> NewDonor {
    donor.full_name = donor.full_name.trim().to_string();
    donor.city = donor.city.trim().to_string();
    donor.email = donor.email.trim().to_lowercase();
    donor.phone_number = donor.phone_number.trim().to_string();
    donor.emergency_contact = donor.emergency_contact.trim().to_string();
    donor.wallet_address = donor
        .wallet_address
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());
    donor.medical_condition = donor
        .medical_condition
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    donor
}
