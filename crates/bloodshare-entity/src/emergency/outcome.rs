//! Per-candidate, per-channel delivery outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::blood_type::BloodType;
use crate::donor::DonorCandidate;

/// Notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// WhatsApp via Twilio.
    #[serde(rename = "whatsapp")]
    WhatsApp,
    /// Email via Resend.
    Email,
}

impl Channel {
    /// Return the channel as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Provider accepted the message.
    Success,
    /// Delivery failed.
    Failure,
}

/// Outcome of one delivery attempt to one candidate over one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOutcome {
    /// Donor identifier.
    pub donor_id: Uuid,
    /// Donor name.
    pub donor_name: String,
    /// Donor blood group.
    pub blood_group: BloodType,
    /// Donor city.
    pub city: String,
    /// Whether the donor can give directly to the patient.
    pub compatible: bool,
    /// Channel attempted.
    pub channel: Channel,
    /// Result.
    pub status: DeliveryStatus,
    /// Provider message id on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Machine-readable error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationOutcome {
    /// Record a successful delivery.
    pub fn success(
        candidate: &DonorCandidate,
        channel: Channel,
        compatible: bool,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            donor_id: candidate.id,
            donor_name: candidate.full_name.clone(),
            blood_group: candidate.blood_group,
            city: candidate.city.clone(),
            compatible,
            channel,
            status: DeliveryStatus::Success,
            message_id: Some(message_id.into()),
            error_code: None,
            error: None,
        }
    }

    /// Record a failed delivery.
    pub fn failure(
        candidate: &DonorCandidate,
        channel: Channel,
        compatible: bool,
        error_code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            donor_id: candidate.id,
            donor_name: candidate.full_name.clone(),
            blood_group: candidate.blood_group,
            city: candidate.city.clone(),
            compatible,
            channel,
            status: DeliveryStatus::Failure,
            message_id: None,
            error_code: Some(error_code.into()),
            error: Some(error.into()),
        }
    }

    /// Whether the attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.status == DeliveryStatus::Success
    }
}
