//! # Medidesk Repository
//!
//! The [`Querier`] contract and its SQLx adapters:
//!
//! ```text
//! Service layer
//!   ↓  Arc<dyn Querier>
//! PgQueries | SqliteQueries     (one SQL text per operation)
//!   ↓
//! PostgreSQL | SQLite
//! ```
//!
//! [`DatabasePool`] picks the backend from the database URL and hands out
//! the matching querier.

#[macro_use]
mod macros;

pub mod params;
pub mod pool;
pub mod postgres;
pub mod querier;
mod rows;
mod sql;
pub mod sqlite;

pub use params::*;
pub use pool::*;
pub use postgres::PgQueries;
pub use querier::Querier;
pub use sqlite::SqliteQueries;

// Both adapters implement the full contract and can be shared as trait objects.
const _: fn() = || {
    fn assert_querier<T: Querier + Clone + 'static>() {}
    assert_querier::<PgQueries>();
    assert_querier::<SqliteQueries>();

    let _: Option<std::sync::Arc<dyn Querier>> = None;
};
