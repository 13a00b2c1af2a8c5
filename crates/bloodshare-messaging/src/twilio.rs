//! Twilio WhatsApp transport.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use bloodshare_core::config::WhatsAppConfig;

use crate::transport::{DeliveryError, DeliveryReceipt, MessageTransport};

/// Sends WhatsApp messages through the Twilio Messages API.
#[derive(Clone)]
pub struct TwilioWhatsAppClient {
    http: Client,
    account_sid: String,
    auth_token: String,
    from: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResource {
    code: Option<i64>,
    message: Option<String>,
}

impl TwilioWhatsAppClient {
    /// Create a client sharing `http` with the other transports.
    pub fn new(http: Client, config: &WhatsAppConfig) -> Self {
        Self {
            http,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from_number.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

impl fmt::Debug for TwilioWhatsAppClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioWhatsAppClient")
            .field("account_sid", &self.account_sid)
            .field("from", &self.from)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MessageTransport for TwilioWhatsAppClient {
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self
            .http
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", self.from.as_str()), ("To", to), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let message: MessageResource = response.json().await?;
            debug!(sid = %message.sid, "Twilio accepted message");
            return Ok(DeliveryReceipt::new(message.sid));
        }

        let text = response.text().await.unwrap_or_default();
        Err(provider_error(status, &text))
    }
}

fn provider_error(status: StatusCode, body: &str) -> DeliveryError {
    let parsed = serde_json::from_str::<ErrorResource>(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|e| e.code)
        .map(|c| c.to_string())
        .unwrap_or_else(|| status.as_u16().to_string());
    let message = parsed
        .and_then(|e| e.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
    DeliveryError::Provider { code, message }
}
