//! Result type aliases for Medidesk.

use crate::MedideskError;

/// A specialized `Result` type for Medidesk operations.
pub type MedideskResult<T> = Result<T, MedideskError>;
