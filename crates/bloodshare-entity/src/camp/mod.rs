//! Blood donation camp entities.

pub mod model;
pub mod status;

pub use model::{Camp, NewCamp};
pub use status::CampStatus;
