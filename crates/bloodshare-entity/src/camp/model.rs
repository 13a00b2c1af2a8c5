//! Camp entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::status::CampStatus;

/// A scheduled blood donation camp.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    /// Unique camp identifier.
    pub id: Uuid,
    /// Camp title.
    pub title: String,
    /// Organising body.
    pub organizer: String,
    /// Date as entered (`YYYY-MM-DD`).
    pub date: String,
    /// Time window as entered (`9:00 AM - 5:00 PM`).
    pub time: String,
    /// Venue.
    pub location: String,
    /// City.
    pub city: String,
    /// Expected donor turnout.
    pub expected_donors: i32,
    /// Contact phone or email.
    pub contact: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CampStatus,
    /// When the camp was created.
    pub created_at: DateTime<Utc>,
    /// When the camp was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data for scheduling a new camp.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCamp {
    /// Camp title.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub title: String,
    /// Organising body.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub organizer: String,
    /// Date.
    #[validate(custom(function = "crate::validation::iso_date"))]
    pub date: String,
    /// Time window.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub time: String,
    /// Venue.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub location: String,
    /// City.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub city: String,
    /// Expected donor turnout.
    #[validate(range(min = 1, message = "Expected donors must be at least 1"))]
    pub expected_donors: i32,
    /// Contact.
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub contact: String,
    /// Description.
    pub description: Option<String>,
}

impl Camp {
    /// Build a new upcoming camp from creation data.
    pub fn from_new(new: NewCamp) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            organizer: new.organizer,
            date: new.date,
            time: new.time,
            location: new.location,
            city: new.city,
            expected_donors: new.expected_donors,
            contact: new.contact,
            description: new.description,
            status: CampStatus::Upcoming,
            created_at: now,
            updated_at: now,
        }
    }
}
