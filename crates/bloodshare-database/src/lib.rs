//! # bloodshare-database
//!
//! PostgreSQL connection management, the donor/camp store traits consumed
//! by the service layer, and their sqlx and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{CampStore, DonorStore};
