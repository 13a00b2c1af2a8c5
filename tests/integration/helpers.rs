//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use bloodshare_api::{AppState, build_app};
use bloodshare_core::config::{AppConfig, CandidateFilterPolicy};
use bloodshare_database::memory::{MemoryCampStore, MemoryDonorStore};
use bloodshare_entity::blood_type::BloodType;
use bloodshare_entity::donor::{Donor, NewDonor};
use bloodshare_messaging::{
    DeliveryError, DeliveryReceipt, EmailTransport, MessageTransport, Transports,
};

/// Transport that records every send and fails for matching recipients.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<String>>,
    fail_for: Vec<String>,
    delay: Duration,
}

impl RecordingTransport {
    /// Fail every send whose recipient contains one of `needles`.
    pub fn failing_for(needles: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: needles.iter().map(|s| s.to_string()).collect(),
            delay: Duration::ZERO,
        }
    }

    /// Wait `delay` before every send, like a slow provider.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Recipients sent to so far, in call order.
    pub fn recipients(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn deliver(&self, to: &str) -> Result<DeliveryReceipt, DeliveryError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(to.to_string());
        if self.fail_for.iter().any(|needle| to.contains(needle.as_str())) {
            return Err(DeliveryError::Provider {
                code: "21211".to_string(),
                message: format!("Rejected recipient {to}"),
            });
        }
        Ok(DeliveryReceipt::new(format!("MSG{:04}", sent.len())))
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send(&self, to: &str, _body: &str) -> Result<DeliveryReceipt, DeliveryError> {
        self.pause().await;
        self.deliver(to)
    }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
    async fn send(
        &self,
        to: &str,
        _subject: &str,
        _html: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.pause().await;
        self.deliver(to)
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Donor store behind the router
    pub donors: Arc<MemoryDonorStore>,
    /// WhatsApp transport behind the router
    pub whatsapp: Arc<RecordingTransport>,
    /// Email transport behind the router
    pub email: Arc<RecordingTransport>,
}

impl TestApp {
    /// Create a test application with working transports.
    pub fn new() -> Self {
        Self::with_transports(
            RecordingTransport::default(),
            RecordingTransport::default(),
            CandidateFilterPolicy::ApprovedOnly,
        )
    }

    /// Create a test application with the given transports and policy.
    pub fn with_transports(
        whatsapp: RecordingTransport,
        email: RecordingTransport,
        policy: CandidateFilterPolicy,
    ) -> Self {
        let mut config = AppConfig::default();
        config.emergency.filter = policy;
        Self::with_config(whatsapp, email, config)
    }

    /// Create a test application with the given transports and configuration.
    pub fn with_config(
        whatsapp: RecordingTransport,
        email: RecordingTransport,
        config: AppConfig,
    ) -> Self {
        let donors = Arc::new(MemoryDonorStore::new());
        let whatsapp = Arc::new(whatsapp);
        let email = Arc::new(email);

        let transports = Transports {
            whatsapp: whatsapp.clone(),
            email: email.clone(),
        };
        let state = AppState::new(
            config,
            donors.clone(),
            Arc::new(MemoryCampStore::new()),
            transports,
        );

        Self {
            router: build_app(state),
            donors,
            whatsapp,
            email,
        }
    }

    /// Insert a donor directly into the store.
    pub async fn seed_donor(
        &self,
        name: &str,
        blood_group: BloodType,
        city: &str,
        phone: &str,
        approved: bool,
    ) -> Donor {
        let mut donor = Donor::from_new(NewDonor {
            wallet_address: None,
            full_name: name.to_string(),
            age: 30,
            blood_group,
            city: city.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone_number: phone.to_string(),
            emergency_contact: "9000000000".to_string(),
            medical_condition: None,
            emergency_availability: true,
        });
        donor.is_approved = approved;
        self.donors.insert(donor.clone()).await;
        donor
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}

/// A complete, valid emergency request body.
pub fn emergency_body(blood_group: &str) -> Value {
    serde_json::json!({
        "patientName": "Asha Verma",
        "contactPerson": "Rohit Verma",
        "phone": "9811122233",
        "bloodGroup": blood_group,
        "unitsNeeded": 2,
        "hospital": "AIIMS",
        "city": "Delhi",
        "urgencyLevel": "critical",
        "additionalInfo": "Ward 4"
    })
}
