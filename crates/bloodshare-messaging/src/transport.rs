//! Transport traits and the delivery error taxonomy.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bloodshare_core::error::{AppError, ErrorKind};
use bloodshare_entity::emergency::Channel;

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id.
    pub id: String,
}

impl DeliveryReceipt {
    /// Wrap a provider message id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Why a single delivery attempt failed.
///
/// These never escape the fan-out; each one becomes a failed
/// notification outcome.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// The phone number cannot be turned into a transport address.
    #[error("Invalid phone number format: expected at least 10 digits, got {digits}")]
    InvalidPhoneFormat {
        /// Digits left after stripping formatting.
        digits: usize,
    },
    /// The provider answered with an error.
    #[error("Provider rejected message ({code}): {message}")]
    Provider {
        /// Provider error code, or the HTTP status when none was given.
        code: String,
        /// Provider error message.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(String),
    /// The channel is disabled or lacks credentials.
    #[error("Channel not configured: {0}")]
    ChannelDisabled(Channel),
}

impl DeliveryError {
    /// Machine-readable code stored on the failed outcome.
    pub fn code(&self) -> String {
        match self {
            Self::InvalidPhoneFormat { .. } => "INVALID_PHONE_FORMAT".to_string(),
            Self::Provider { code, .. } => code.clone(),
            Self::Http(_) => "HTTP_ERROR".to_string(),
            Self::ChannelDisabled(_) => "CHANNEL_DISABLED".to_string(),
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Http("request timed out".to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<DeliveryError> for AppError {
    fn from(err: DeliveryError) -> Self {
        let kind = match err {
            DeliveryError::InvalidPhoneFormat { .. } => ErrorKind::Validation,
            DeliveryError::ChannelDisabled(_) => ErrorKind::ServiceUnavailable,
            DeliveryError::Provider { .. } | DeliveryError::Http(_) => ErrorKind::ExternalService,
        };
        AppError::new(kind, err.to_string())
    }
}

/// Instant-message channel (WhatsApp).
#[async_trait]
pub trait MessageTransport: Send + Sync + fmt::Debug + 'static {
    /// Send `body` to an address already in transport form.
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, DeliveryError>;

    /// Whether the channel can deliver at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Email channel.
#[async_trait]
pub trait EmailTransport: Send + Sync + fmt::Debug + 'static {
    /// Send an HTML email.
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<DeliveryReceipt, DeliveryError>;

    /// Whether the channel can deliver at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DeliveryError::InvalidPhoneFormat { digits: 5 }.code(),
            "INVALID_PHONE_FORMAT"
        );
        let provider = DeliveryError::Provider {
            code: "21211".to_string(),
            message: "Invalid 'To' Phone Number".to_string(),
        };
        assert_eq!(provider.code(), "21211");
        assert_eq!(
            DeliveryError::ChannelDisabled(Channel::Email).to_string(),
            "Channel not configured: email"
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = DeliveryError::InvalidPhoneFormat { digits: 3 }.into();
        assert!(err.is(ErrorKind::Validation));
        let err: AppError = DeliveryError::Http("refused".to_string()).into();
        assert!(err.is(ErrorKind::ExternalService));
    }
}
