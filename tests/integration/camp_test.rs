//! Integration tests for donation camps.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

fn camp(title: &str, city: &str, date: &str) -> serde_json::Value {
    json!({
        "title": title,
        "organizer": "Red Cross",
        "date": date,
        "time": "9:00 AM - 5:00 PM",
        "location": "Town Hall",
        "city": city,
        "expectedDonors": 80,
        "contact": "9876543210"
    })
}

#[tokio::test]
async fn test_create_list_and_complete() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/camps", Some(camp("Winter Drive", "Chennai", "2026-12-05")))
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["status"], "Upcoming");
    app.request("POST", "/api/camps", Some(camp("Autumn Drive", "Chennai", "2026-11-01")))
        .await;
    app.request("POST", "/api/camps", Some(camp("Metro Drive", "Delhi", "2026-11-15")))
        .await;

    let chennai = app.request("GET", "/api/camps?city=Chennai", None).await;
    assert_eq!(chennai.status, StatusCode::OK);
    let titles: Vec<&str> = chennai
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Autumn Drive", "Winter Drive"]);

    let all = app.request("GET", "/api/camps?city=All%20Cities", None).await;
    assert_eq!(all.body.as_array().map(Vec::len), Some(3));

    let id = created.body["id"].as_str().unwrap();
    let completed = app
        .request("PUT", &format!("/api/camps/{id}/complete"), None)
        .await;
    assert_eq!(completed.status, StatusCode::OK);
    assert_eq!(completed.body["camp"]["status"], "Completed");

    let upcoming = app.request("GET", "/api/camps?status=upcoming", None).await;
    assert_eq!(upcoming.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_rejects_zero_expected_donors() {
    let app = TestApp::new();
    let mut body = camp("Empty Drive", "Pune", "2026-11-01");
    body["expectedDonors"] = json!(0);

    let response = app.request("POST", "/api/camps", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_bad_date() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/camps", Some(camp("Drive", "Pune", "01/11/2026")))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_status_filter() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/camps?status=cancelled", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_complete_unknown_camp() {
    let app = TestApp::new();
    let response = app
        .request(
            "PUT",
            &format!("/api/camps/{}/complete", uuid::Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
