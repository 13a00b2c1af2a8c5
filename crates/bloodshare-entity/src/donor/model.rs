//! Donor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::blood_type::BloodType;

/// A registered blood donor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    /// Unique donor identifier.
    pub id: Uuid,
    /// Wallet address used by the on-chain registry, stored opaquely.
    pub wallet_address: Option<String>,
    /// Full name.
    pub full_name: String,
    /// Age in years.
    pub age: i32,
    /// Blood group.
    pub blood_group: BloodType,
    /// City of residence.
    pub city: String,
    /// Contact email (unique).
    pub email: String,
    /// Contact phone as entered at registration.
    pub phone_number: String,
    /// Emergency contact phone.
    pub emergency_contact: String,
    /// Declared medical conditions.
    pub medical_condition: Option<String>,
    /// Whether the donor agreed to be contacted for emergencies.
    pub emergency_availability: bool,
    /// Whether an admin approved the registration.
    pub is_approved: bool,
    /// When the donor registered.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data for registering a new donor. Registrations always start unapproved.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDonor {
    /// Wallet address, if the donor also registered on-chain.
    pub wallet_address: Option<String>,
    /// Full name.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub full_name: String,
    /// Age in years.
    #[validate(range(min = 18, max = 65, message = "Donors must be between 18 and 65 years old"))]
    pub age: i32,
    /// Blood group.
    pub blood_group: BloodType,
    /// City of residence.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub city: String,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Contact phone.
    #[validate(custom(function = "crate::validation::ten_digit_phone"))]
    pub phone_number: String,
    /// Emergency contact phone.
    #[validate(custom(function = "crate::validation::ten_digit_phone"))]
    pub emergency_contact: String,
    /// Declared medical conditions.
    pub medical_condition: Option<String>,
    /// Emergency opt-in.
    pub emergency_availability: bool,
}

impl Donor {
    /// Build a fresh, unapproved donor record from registration data.
    pub fn from_new(new: NewDonor) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            wallet_address: new.wallet_address,
            full_name: new.full_name,
            age: new.age,
            blood_group: new.blood_group,
            city: new.city,
            email: new.email,
            phone_number: new.phone_number,
            emergency_contact: new.emergency_contact,
            medical_condition: new.medical_condition,
            emergency_availability: new.emergency_availability,
            is_approved: false,
            created_at: now,
            updated_at: now,
        }
    }
}
