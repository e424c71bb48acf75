//! # Medidesk Config
//!
//! Layered configuration for the data-access layer: TOML files, `.env`
//! and `MEDIDESK_*` environment variables, validated on load.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
