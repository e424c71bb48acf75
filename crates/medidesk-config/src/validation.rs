//! Configuration validation module.
//!
//! Collects every problem in one pass so a misconfigured deployment fails
//! at startup with the full list rather than at the first query.

use crate::{AppConfig, DatabaseConfig};
use medidesk_core::telemetry::TelemetryConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Database URL is empty or has an unsupported scheme.
    InvalidUrl { message: String },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Log filter is empty.
    EmptyLogFilter,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { message } => write!(f, "Invalid database URL: {message}"),
            Self::InvalidPoolSize { min, max } => write!(
                f,
                "Invalid pool size: min ({min}) cannot be greater than max ({max})"
            ),
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {value} exceeds maximum allowed ({maximum})")
            }
            Self::NonPositiveTimeout { name } => write!(f, "Timeout '{name}' must be positive"),
            Self::EmptyLogFilter => write!(f, "Log filter cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_database(&config.database, &mut errors);
        Self::validate_logging(&config.logging, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.trim().is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                message: "URL cannot be empty".to_string(),
            });
        } else if config.backend().is_none() {
            errors.push(ConfigValidationError::InvalidUrl {
                message: "URL must start with postgres://, postgresql:// or sqlite:".to_string(),
            });
        }

        if config.max_connections == 0 || config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        for (name, value) in [
            ("database.connect_timeout_secs", config.connect_timeout_secs),
            ("database.idle_timeout_secs", config.idle_timeout_secs),
            ("database.statement_timeout_secs", config.statement_timeout_secs),
        ] {
            if value == 0 {
                errors.push(ConfigValidationError::NonPositiveTimeout {
                    name: name.to_string(),
                });
            }
        }
    }

    fn validate_logging(config: &TelemetryConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.filter.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyLogFilter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_sqlite_memory_is_valid() {
        let mut config = AppConfig::default();
        config.database = DatabaseConfig::with_url("sqlite::memory:");
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_empty_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_unsupported_scheme() {
        let mut config = AppConfig::default();
        config.database.url = "mysql://localhost/medidesk".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("postgres://"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;
        config.database.statement_timeout_secs = 0;
        config.logging.filter = "  ".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigValidationError::InvalidPoolSize { min: 20, max: 5 }));
        assert!(errors.contains(&ConfigValidationError::NonPositiveTimeout {
            name: "database.statement_timeout_secs".to_string(),
        }));
        assert!(errors.contains(&ConfigValidationError::EmptyLogFilter));
    }

    #[test]
    fn test_pool_size_too_large() {
        let mut config = AppConfig::default();
        config.database.max_connections = 5000;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::PoolSizeTooLarge {
                value: 5000,
                maximum: 1000
            }]
        );
    }
}
