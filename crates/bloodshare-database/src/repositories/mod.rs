//! PostgreSQL repository implementations.

pub mod camp;
pub mod donor;

pub use camp::CampRepository;
pub use donor::DonorRepository;
