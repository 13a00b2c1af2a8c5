//! # bloodshare-service
//!
//! Business logic for BloodShare. Each service wraps the storage traits
//! and messaging transports it needs.
//!
//! Services follow constructor injection: every dependency is provided
//! at construction time as an `Arc`.

pub mod camp;
pub mod donor;
pub mod emergency;
pub mod hospital;

pub use camp::CampService;
pub use donor::{DonorListFilter, DonorService, DonorSummary};
pub use emergency::{EmergencyError, EmergencyService};
pub use hospital::HospitalService;
