//! Convenience result type alias for BloodShare.

use crate::error::AppError;

/// A specialized `Result` type for BloodShare operations.
pub type AppResult<T> = Result<T, AppError>;
