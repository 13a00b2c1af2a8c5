//! Failures of an emergency broadcast as a whole.

use thiserror::Error;

use bloodshare_core::AppError;
use bloodshare_entity::emergency::EmergencyResult;

/// Ways a broadcast can fail. Individual delivery failures are not
/// errors; they are recorded as outcomes inside the result.
#[derive(Debug, Error)]
pub enum EmergencyError {
    /// No donor matched the candidate filter. Nothing was sent.
    #[error("No approved donors found.")]
    NoCandidates(Box<EmergencyResult>),
    /// Every attempt on every channel failed.
    #[error("Failed to send messages to any donors.")]
    AllDeliveriesFailed(Box<EmergencyResult>),
    /// Validation, storage, or other application failure.
    #[error(transparent)]
    App(#[from] AppError),
}

impl EmergencyError {
    /// The partial result carried by the error, if any.
    pub fn result(&self) -> Option<&EmergencyResult> {
        match self {
            Self::NoCandidates(r) | Self::AllDeliveriesFailed(r) => Some(&**r),
            Self::App(_) => None,
        }
    }
}
