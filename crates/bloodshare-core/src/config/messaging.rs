//! Outbound messaging configuration (Twilio WhatsApp and Resend email).
//!
//! Credentials have no built-in defaults. They are expected from the
//! environment, e.g. `BLOODSHARE__MESSAGING__WHATSAPP__AUTH_TOKEN`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Messaging configuration shared by both channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Per-call timeout applied to every provider request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// WhatsApp channel settings.
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    /// Email channel settings.
    #[serde(default)]
    pub email: EmailConfig,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: default_request_timeout(),
            whatsapp: WhatsAppConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

/// Twilio WhatsApp settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Whether the channel is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Twilio account SID.
    #[serde(default)]
    pub account_sid: String,
    /// Twilio auth token.
    #[serde(default)]
    pub auth_token: String,
    /// Sender address in Twilio form (`whatsapp:+14155238886`).
    #[serde(default = "default_from_number")]
    pub from_number: String,
    /// Twilio REST API base URL.
    #[serde(default = "default_twilio_base")]
    pub api_base_url: String,
    /// Country calling code prepended to bare 10-digit numbers.
    #[serde(default = "default_country_code")]
    pub default_country_code: String,
}

impl WhatsAppConfig {
    /// Returns `true` when the channel is enabled and credentials are present.
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.account_sid.is_empty() && !self.auth_token.is_empty()
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: default_from_number(),
            api_base_url: default_twilio_base(),
            default_country_code: default_country_code(),
        }
    }
}

impl fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field("enabled", &self.enabled)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"****")
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .field("default_country_code", &self.default_country_code)
            .finish()
    }
}

/// Resend email settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether the channel is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Resend API key.
    #[serde(default)]
    pub api_key: String,
    /// Sender address.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Resend REST API base URL.
    #[serde(default = "default_resend_base")]
    pub api_base_url: String,
}

impl EmailConfig {
    /// Returns `true` when the channel is enabled and an API key is present.
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            from_address: default_from_address(),
            api_base_url: default_resend_base(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("enabled", &self.enabled)
            .field("api_key", &"****")
            .field("from_address", &self.from_address)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    15
}

fn default_from_number() -> String {
    "whatsapp:+14155238886".to_string()
}

fn default_twilio_base() -> String {
    "https://api.twilio.com".to_string()
}

fn default_country_code() -> String {
    "91".to_string()
}

fn default_from_address() -> String {
    "BloodShare <alerts@bloodshare.app>".to_string()
}

fn default_resend_base() -> String {
    "https://api.resend.com".to_string()
}
