//! # bloodshare-entity
//!
//! Domain entity models for BloodShare. Database entities derive
//! `sqlx::FromRow`; transient values (emergency requests, notification
//! outcomes) are plain serde types.

pub mod blood_type;
pub mod camp;
pub mod donor;
pub mod emergency;
pub mod hospital;
pub mod validation;

pub use blood_type::{BloodType, compatible_donor_types, compatible_donor_types_str};
