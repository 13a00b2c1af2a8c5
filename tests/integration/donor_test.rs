//! Integration tests for donor registration and approval.

mod helpers;

use http::StatusCode;
use serde_json::json;

use bloodshare_entity::blood_type::BloodType;
use helpers::TestApp;

fn registration(email: &str) -> serde_json::Value {
    json!({
        "fullName": "  Kavya Nair ",
        "age": 27,
        "bloodGroup": "A-",
        "city": "Bangalore",
        "email": email,
        "phoneNumber": "9845012345",
        "emergencyContact": "9845098765",
        "medicalCondition": "",
        "emergencyAvailability": true
    })
}

#[tokio::test]
async fn test_register_then_approve_flow() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/register", Some(registration("Kavya@Example.com")))
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["message"], "Donor data saved successfully.");
    assert_eq!(created.body["donor"]["fullName"], "Kavya Nair");
    assert_eq!(created.body["donor"]["email"], "kavya@example.com");
    assert_eq!(created.body["donor"]["isApproved"], false);

    let id = created.body["donor"]["id"].as_str().unwrap().to_string();

    let pending = app.request("GET", "/api/donors/pending", None).await;
    assert_eq!(pending.body.as_array().map(Vec::len), Some(1));
    let approved = app.request("GET", "/api/donors/approved", None).await;
    assert_eq!(approved.body.as_array().map(Vec::len), Some(0));

    let response = app
        .request("PUT", &format!("/api/donors/{id}/approve"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Donor approved successfully.");
    assert_eq!(response.body["donor"]["isApproved"], true);

    let approved = app.request("GET", "/api/donors/approved", None).await;
    assert_eq!(approved.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let app = TestApp::new();
    app.request("POST", "/api/register", Some(registration("dup@example.com")))
        .await;

    let response = app
        .request("POST", "/api/register", Some(registration("DUP@example.com")))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validates_fields() {
    let app = TestApp::new();
    let mut body = registration("young@example.com");
    body["age"] = json!(16);
    body["phoneNumber"] = json!("12345");

    let response = app.request("POST", "/api/register", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("age"), "{message}");
    assert!(message.contains("phone_number"), "{message}");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/register", Some(json!({ "fullName": "Only Name" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_approve_unknown_donor_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "PUT",
            &format!("/api/donors/{}/approve", uuid::Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Donor not found.");
}

#[tokio::test]
async fn test_approved_list_filters_by_group_and_city() {
    let app = TestApp::new();
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "Delhi", "9876543210", true)
        .await;
    app.seed_donor("Meera Shah", BloodType::ONeg, "Mumbai", "9123456780", true)
        .await;
    app.seed_donor("Arjun Das", BloodType::BPos, "Delhi", "9000011111", true)
        .await;

    let response = app
        .request("GET", "/api/donors/approved?bloodGroup=O-&city=delhi", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let donors = response.body.as_array().unwrap();
    assert_eq!(donors.len(), 1);
    assert_eq!(donors[0]["fullName"], "Ravi Kumar");
}

#[tokio::test]
async fn test_debug_summary_counts() {
    let app = TestApp::new();
    app.seed_donor("Ravi Kumar", BloodType::ONeg, "Delhi", "9876543210", true)
        .await;
    app.seed_donor("Pending Person", BloodType::APos, "Pune", "9988776655", false)
        .await;

    let response = app.request("GET", "/api/debug/donors", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["approved"], 1);
    assert_eq!(response.body["donors"].as_array().map(Vec::len), Some(2));
}
