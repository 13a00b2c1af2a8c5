//! Route handlers organized by domain.

pub mod camp;
pub mod compatibility;
pub mod donor;
pub mod emergency;
pub mod health;
pub mod hospital;
pub mod message;
