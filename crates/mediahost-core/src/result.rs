//! Convenience result type alias for MediaHost.

use crate::error::AppError;

/// A specialized `Result` type for MediaHost operations.
pub type AppResult<T> = Result<T, AppError>;
