//! Integration tests for the emergency broadcast endpoint.

mod helpers;

use std::time::Duration;

use http::StatusCode;

use bloodshare_core::config::{AppConfig, CandidateFilterPolicy};
use bloodshare_entity::blood_type::BloodType;
use helpers::{RecordingTransport, TestApp, emergency_body};

#[tokio::test]
async fn test_broadcast_notifies_every_approved_donor() {
    let app = TestApp::new();
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "Delhi", "9876543210", true)
        .await;
    app.seed_donor("Meera Shah", BloodType::AbPos, "Mumbai", "8123456780", true)
        .await;
    app.seed_donor("Pending Person", BloodType::ONeg, "Delhi", "9988776655", false)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("B+")))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["message"],
        "Emergency request sent successfully. 2/2 donors notified."
    );

    let results = &response.body["results"];
    assert_eq!(results["totalCandidates"], 2);
    assert_eq!(results["whatsapp"]["succeeded"], 2);
    assert_eq!(results["email"]["succeeded"], 2);
    assert_eq!(results["compatibleDonorsNotified"], 1);
    assert_eq!(results["generalDonorsNotified"], 1);
    assert_eq!(
        results["compatibleBloodGroups"],
        serde_json::json!(["O-", "O+", "B-", "B+"])
    );
    assert_eq!(results["outcomes"].as_array().map(Vec::len), Some(4));

    let mut recipients = app.whatsapp.recipients();
    recipients.sort();
    assert_eq!(
        recipients,
        vec!["whatsapp:+918123456780", "whatsapp:+919876543210"]
    );
    assert_eq!(app.email.recipients().len(), 2);
}

#[tokio::test]
async fn test_missing_field_is_rejected_before_any_send() {
    let app = TestApp::new();
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "Delhi", "9876543210", true)
        .await;

    let mut body = emergency_body("A+");
    body["hospital"] = serde_json::Value::String(String::new());

    let response = app.request("POST", "/api/emergency", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Missing required fields.");
    assert!(app.whatsapp.recipients().is_empty());
    assert!(app.email.recipients().is_empty());
}

#[tokio::test]
async fn test_unknown_blood_group_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("C+")))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_no_candidates_is_not_found() {
    let app = TestApp::new();
    app.seed_donor("Pending Person", BloodType::ONeg, "Delhi", "9988776655", false)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("O-")))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "No approved donors found.");
    assert!(app.whatsapp.recipients().is_empty());
}

#[tokio::test]
async fn test_one_channel_failing_still_succeeds() {
    let app = TestApp::with_transports(
        RecordingTransport::failing_for(&["whatsapp:"]),
        RecordingTransport::default(),
        CandidateFilterPolicy::ApprovedOnly,
    );
    app.seed_donor("Ravi Kumar", BloodType::BPos, "Delhi", "9876543210", true)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("B+")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let results = &response.body["results"];
    assert_eq!(results["whatsapp"]["failed"], 1);
    assert_eq!(results["email"]["succeeded"], 1);
    assert_eq!(results["compatibleDonorsNotified"], 1);
}

#[tokio::test]
async fn test_every_delivery_failing_is_server_error_with_details() {
    let app = TestApp::with_transports(
        RecordingTransport::failing_for(&["whatsapp:"]),
        RecordingTransport::failing_for(&["@"]),
        CandidateFilterPolicy::ApprovedOnly,
    );
    app.seed_donor("Ravi Kumar", BloodType::BPos, "Delhi", "9876543210", true)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("B+")))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body["message"],
        "Failed to send messages to any donors."
    );
    let details = response.body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert!(details.iter().all(|o| o["status"] == "failure"));
    assert!(details.iter().all(|o| o["errorCode"] == "21211"));
}

#[tokio::test]
async fn test_same_city_policy_limits_candidates() {
    let app = TestApp::with_transports(
        RecordingTransport::default(),
        RecordingTransport::default(),
        CandidateFilterPolicy::SameCity,
    );
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "delhi", "9876543210", true)
        .await;
    app.seed_donor("Meera Shah", BloodType::ONeg, "Mumbai", "9123456780", true)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("O-")))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"]["totalCandidates"], 1);
    assert_eq!(app.whatsapp.recipients(), vec!["whatsapp:+919876543210"]);
}

#[tokio::test]
async fn test_test_message_endpoint() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/test-message",
            Some(serde_json::json!({ "phone": "98765-43210" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body["sid"].as_str().is_some());
    assert_eq!(app.whatsapp.recipients(), vec!["whatsapp:+919876543210"]);

    let short = app
        .request(
            "POST",
            "/api/test-message",
            Some(serde_json::json!({ "phone": "12345" })),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slow_broadcast_is_not_cut_short_by_request_timeout() {
    let mut config = AppConfig::default();
    config.server.request_timeout_seconds = 1;
    config.emergency.max_concurrent_dispatches = 1;
    let app = TestApp::with_config(
        RecordingTransport::slow(Duration::from_millis(700)),
        RecordingTransport::slow(Duration::from_millis(700)),
        config,
    );
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "Delhi", "9876543210", true)
        .await;
    app.seed_donor("Meera Shah", BloodType::ONeg, "Mumbai", "8123456780", true)
        .await;
    app.seed_donor("Kiran Rao", BloodType::ONeg, "Pune", "7012345678", true)
        .await;

    let response = app
        .request("POST", "/api/emergency", Some(emergency_body("O-")))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    assert_eq!(response.body["results"]["totalCandidates"], 3);
    assert_eq!(response.body["results"]["whatsapp"]["succeeded"], 3);
    assert_eq!(response.body["results"]["email"]["succeeded"], 3);
    assert_eq!(app.whatsapp.recipients().len(), 3);
    assert_eq!(app.email.recipients().len(), 3);
}

#[tokio::test]
async fn test_other_routes_keep_request_timeout() {
    let mut config = AppConfig::default();
    config.server.request_timeout_seconds = 1;
    let app = TestApp::with_config(
        RecordingTransport::slow(Duration::from_millis(1500)),
        RecordingTransport::default(),
        config,
    );

    let response = app
        .request(
            "POST",
            "/api/test-message",
            Some(serde_json::json!({ "phone": "9876543210" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::REQUEST_TIMEOUT);
}
