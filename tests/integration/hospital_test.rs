//! Integration tests for hospital lookup, compatibility, and health.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_nearby_hospitals_sorted_by_distance() {
    let app = TestApp::new();

    // Connaught Place, New Delhi
    let response = app
        .request("GET", "/api/hospitals/nearby?lat=28.6315&lon=77.2167&radius_km=25", None)
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["radiusKm"], 25.0);
    let hospitals = response.body["hospitals"].as_array().unwrap();
    assert!(!hospitals.is_empty());
    assert!(hospitals.iter().all(|h| h["city"] == "Delhi"));

    let distances: Vec<f64> = hospitals
        .iter()
        .filter_map(|h| h["distanceKm"].as_f64())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_nearby_defaults_radius() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/hospitals/nearby?lat=0&lng=0", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["radiusKm"], 10.0);
    assert_eq!(response.body["hospitals"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_nearby_rejects_invalid_coordinates() {
    let app = TestApp::new();

    let out_of_range = app
        .request("GET", "/api/hospitals/nearby?lat=95&lon=10", None)
        .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);

    let missing = app.request("GET", "/api/hospitals/nearby?lat=12.9", None).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compatibility_lookup() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/compatibility/O-", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["compatibleDonors"], serde_json::json!(["O-"]));
    assert_eq!(
        response.body["canDonateTo"].as_array().map(Vec::len),
        Some(8)
    );

    let response = app.request("GET", "/api/compatibility/AB%2B", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["canDonateTo"], serde_json::json!(["AB+"]));

    let response = app.request("GET", "/api/compatibility/Z", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_banner() {
    let app = TestApp::new();

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["success"], true);
    assert_eq!(health.body["data"]["status"], "ok");
    assert_eq!(health.body["data"]["whatsapp"], "enabled");

    let banner = app.request("GET", "/", None).await;
    assert_eq!(banner.status, StatusCode::OK);
    assert_eq!(banner.text, "BloodShare Backend Server is running!");
}
