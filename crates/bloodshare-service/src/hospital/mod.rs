//! Nearby hospital lookup over a built-in catalogue.

mod catalog;
pub mod distance;
pub mod service;

pub use distance::haversine_km;
pub use service::HospitalService;
