//! Emergency blood-request values. None of these are persisted.

pub mod outcome;
pub mod request;
pub mod result;

pub use outcome::{Channel, DeliveryStatus, NotificationOutcome};
pub use request::{EmergencyRequest, UrgencyLevel};
pub use result::{ChannelTally, EmergencyResult};
