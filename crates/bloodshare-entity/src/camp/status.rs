//! Camp lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a camp is still ahead or already held.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "camp_status")]
pub enum CampStatus {
    /// Scheduled, not yet held.
    #[default]
    Upcoming,
    /// Already held.
    Completed,
}

impl CampStatus {
    /// Return the status as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for CampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampStatus {
    type Err = bloodshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            _ => Err(bloodshare_core::AppError::validation(format!(
                "Invalid camp status: '{s}'. Expected one of: Upcoming, Completed"
            ))),
        }
    }
}
