//! SQLite querier, for embedded deployments and tests.

use sqlx::SqlitePool;

/// [`Querier`](crate::Querier) over a SQLite pool.
///
/// The pool must have foreign keys enabled for the cascade and
/// referential checks to apply; [`DatabasePool`](crate::DatabasePool)
/// always does.
#[derive(Debug, Clone)]
pub struct SqliteQueries {
    pool: SqlitePool,
}

impl SqliteQueries {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl_querier!(SqliteQueries);
