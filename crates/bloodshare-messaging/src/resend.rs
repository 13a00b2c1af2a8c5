//! Resend email transport.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bloodshare_core::config::EmailConfig;

use crate::transport::{DeliveryError, DeliveryReceipt, EmailTransport};

/// Sends email through the Resend REST API.
#[derive(Clone)]
pub struct ResendEmailClient {
    http: Client,
    api_key: String,
    from: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    name: Option<String>,
    message: Option<String>,
}

impl ResendEmailClient {
    /// Create a client sharing `http` with the other transports.
    pub fn new(http: Client, config: &EmailConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            from: config.from_address.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl fmt::Debug for ResendEmailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendEmailClient")
            .field("from", &self.from)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl EmailTransport for ResendEmailClient {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let payload = SendEmail {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .http
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let sent: SendEmailResponse = response.json().await?;
            debug!(id = %sent.id, "Resend accepted email");
            return Ok(DeliveryReceipt::new(sent.id));
        }

        let text = response.text().await.unwrap_or_default();
        Err(provider_error(status, &text))
    }
}

fn provider_error(status: StatusCode, body: &str) -> DeliveryError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|e| e.name.clone())
        .unwrap_or_else(|| status.as_u16().to_string());
    let message = parsed
        .and_then(|e| e.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
    DeliveryError::Provider { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = SendEmail {
            from: "BloodShare <alerts@bloodshare.app>",
            to: ["donor@example.com"],
            subject: "Urgent",
            html: "<p>hi</p>",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["to"][0], "donor@example.com");
        assert_eq!(json["subject"], "Urgent");
    }

    #[test]
    fn test_provider_error_from_resend_body() {
        let body = r#"{"statusCode":422,"name":"validation_error","message":"Invalid `to` field."}"#;
        match provider_error(StatusCode::UNPROCESSABLE_ENTITY, body) {
            DeliveryError::Provider { code, message } => {
                assert_eq!(code, "validation_error");
                assert_eq!(message, "Invalid `to` field.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_emails_url() {
        let config = EmailConfig {
            api_key: "re_test".to_string(),
            ..EmailConfig::default()
        };
        let client = ResendEmailClient::new(Client::new(), &config);
        assert_eq!(client.emails_url(), "https://api.resend.com/emails");
        assert!(!format!("{client:?}").contains("re_test"));
    }
}
