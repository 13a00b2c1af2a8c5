//! # bloodshare-messaging
//!
//! Outbound delivery channels for emergency broadcasts: the WhatsApp
//! transport (Twilio), the email transport (Resend), phone-number
//! normalisation, and the message templates shared by both channels.

pub mod disabled;
pub mod phone;
pub mod resend;
pub mod template;
pub mod transport;
pub mod twilio;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use bloodshare_core::config::MessagingConfig;
use bloodshare_core::error::{AppError, ErrorKind};
use bloodshare_entity::emergency::Channel;

pub use disabled::DisabledTransport;
pub use phone::format_for_transport;
pub use resend::ResendEmailClient;
pub use transport::{DeliveryError, DeliveryReceipt, EmailTransport, MessageTransport};
pub use twilio::TwilioWhatsAppClient;

/// The pair of transports used by the fan-out.
#[derive(Debug, Clone)]
pub struct Transports {
    /// Instant-message channel.
    pub whatsapp: Arc<dyn MessageTransport>,
    /// Email channel.
    pub email: Arc<dyn EmailTransport>,
}

impl Transports {
    /// Build both transports from configuration.
    ///
    /// A disabled or unconfigured channel is replaced by a
    /// [`DisabledTransport`] that fails every attempt.
    pub fn from_config(config: &MessagingConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("bloodshare/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        let whatsapp: Arc<dyn MessageTransport> = if config.whatsapp.is_configured() {
            info!(from = %config.whatsapp.from_number, "WhatsApp channel enabled");
            Arc::new(TwilioWhatsAppClient::new(http.clone(), &config.whatsapp))
        } else {
            warn!("WhatsApp channel not configured; deliveries will be recorded as failures");
            Arc::new(DisabledTransport::new(Channel::WhatsApp))
        };

        let email: Arc<dyn EmailTransport> = if config.email.is_configured() {
            info!(from = %config.email.from_address, "Email channel enabled");
            Arc::new(ResendEmailClient::new(http, &config.email))
        } else {
            warn!("Email channel not configured; deliveries will be recorded as failures");
            Arc::new(DisabledTransport::new(Channel::Email))
        };

        Ok(Self { whatsapp, email })
    }
}
