//! # Medidesk Core
//!
//! Core types shared by every layer of the Medidesk data-access stack:
//! the error taxonomy, the per-call [`QueryContext`], pagination requests,
//! the persisted domain entities and opt-in parameter validation.

pub mod context;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use context::*;
pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
