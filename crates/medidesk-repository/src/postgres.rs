//! PostgreSQL querier.

use sqlx::PgPool;

/// [`Querier`](crate::Querier) over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgQueries {
    pool: PgPool,
}

impl PgQueries {
    /// Creates a querier over the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl_querier!(PgQueries);
