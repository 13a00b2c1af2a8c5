//! Donor domain entities.

pub mod candidate;
pub mod model;

pub use candidate::{CandidateFilter, DonorCandidate};
pub use model::{Donor, NewDonor};
