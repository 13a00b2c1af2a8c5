//! Donor registration and approval.

pub mod service;

pub use service::{DonorDigest, DonorListFilter, DonorService, DonorSummary};
