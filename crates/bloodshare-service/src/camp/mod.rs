//! Blood donation camps.

pub mod service;

pub use service::CampService;
