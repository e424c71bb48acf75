//! Persisted domain entities.
//!
//! These mirror the rows owned by the store; they carry no behaviour beyond
//! small accessors. Lifecycle and invariants are enforced by the schema.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
