//! # bloodshare-api
//!
//! HTTP API layer for BloodShare built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, compression, request
//! logging), DTOs, and the mapping from application errors to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
