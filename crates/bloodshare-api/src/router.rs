//! Route definitions for the BloodShare HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`, apart
//! from the banner at `/`. Every route except the emergency broadcast is
//! bounded by the request timeout; a broadcast always runs until every
//! dispatch has settled.

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route and the per-route timeout.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(messaging_routes())
        .merge(donor_routes())
        .merge(camp_routes())
        .merge(hospital_routes())
        .merge(health_routes())
        .layer(TimeoutLayer::new(timeout))
        .merge(broadcast_routes());

    Router::new()
        .route("/", get(handlers::health::banner))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Emergency broadcast, outside the request timeout
fn broadcast_routes() -> Router<AppState> {
    Router::new().route("/emergency", post(handlers::emergency::create_emergency))
}

/// Messaging checks and compatibility lookup
fn messaging_routes() -> Router<AppState> {
    Router::new()
        .route("/test-message", post(handlers::message::send_test))
        .route(
            "/compatibility/{blood_group}",
            get(handlers::compatibility::lookup),
        )
}

/// Donor registration and approval
fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::donor::register))
        .route("/donors/approved", get(handlers::donor::list_approved))
        .route("/donors/pending", get(handlers::donor::list_pending))
        .route("/donors/{id}/approve", put(handlers::donor::approve))
        .route("/debug/donors", get(handlers::donor::summary))
}

/// Donation camps
fn camp_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/camps",
            get(handlers::camp::list_camps).post(handlers::camp::create_camp),
        )
        .route("/camps/{id}/complete", put(handlers::camp::complete_camp))
}

/// Hospital lookup
fn hospital_routes() -> Router<AppState> {
    Router::new().route("/hospitals/nearby", get(handlers::hospital::nearby))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
