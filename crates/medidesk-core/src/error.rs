//! Unified error types for the data-access layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error type for every Medidesk operation.
///
/// The first four variants form the store taxonomy every query can return.
/// The remaining variants cover the ambient concerns around the querier
/// (parameter validation, configuration, invariants broken by persisted data).
#[derive(Error, Debug)]
pub enum MedideskError {
    // ============ Store Taxonomy ============
    /// Lookup, update or delete target does not exist
    #[error("Not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    /// Uniqueness or referential constraint breach
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity, timeout or unclassified store fault
    #[error("Store error: {0}")]
    Store(String),

    /// Context cancelled or deadline exceeded
    #[error("Cancelled: {0}")]
    Cancelled(String),

    // ============ Ambient Errors ============
    /// Parameter validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The kind tag carried by every [`MedideskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    ConstraintViolation,
    Store,
    Cancelled,
    Validation,
    Configuration,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::ConstraintViolation => "constraint_violation",
            Self::Store => "store",
            Self::Cancelled => "cancelled",
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

impl MedideskError {
    /// Returns the kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::Store(_) => ErrorKind::Store,
            Self::Cancelled(_) => ErrorKind::Cancelled,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Internal(_) | Self::Other(_) => ErrorKind::Internal,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::Store(_) => "STORE_ERROR",
            Self::Cancelled(_) => "CANCELLED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for an entity key.
    #[must_use]
    pub fn not_found<T: ToString>(entity: &'static str, key: T) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint_violation<T: Into<String>>(message: T) -> Self {
        Self::ConstraintViolation(message.into())
    }

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled<T: Into<String>>(reason: T) -> Self {
        Self::Cancelled(reason.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Checks if the caller may reasonably retry the failed call.
    ///
    /// Nothing in this crate retries; the hint is for the calling layer.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for MedideskError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind as DbErrorKind;

        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity: "row",
                key: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => match db_err.kind() {
                DbErrorKind::UniqueViolation
                | DbErrorKind::ForeignKeyViolation
                | DbErrorKind::NotNullViolation
                | DbErrorKind::CheckViolation => Self::ConstraintViolation(db_err.message().to_string()),
                _ => Self::Store(err.to_string()),
            },
            _ => Self::Store(err.to_string()),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for MedideskError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Store(format!("Migration failed: {err}"))
    }
}
