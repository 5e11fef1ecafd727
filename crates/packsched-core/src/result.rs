//! Convenience result type alias for PackScheduler.

use crate::error::AppError;

/// A specialized `Result` type for PackScheduler operations.
///
/// Every container, roster, and schedule operation reports failure through
/// this alias so callers can chain them with `?`.
pub type AppResult<T> = Result<T, AppError>;
