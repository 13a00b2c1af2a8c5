//! Emergency blood-request broadcasting.

pub mod error;
pub mod service;

pub use error::EmergencyError;
pub use service::EmergencyService;
