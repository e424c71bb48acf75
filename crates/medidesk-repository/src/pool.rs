//! Database connection pool management.

use crate::{PgQueries, Querier, SqliteQueries};
use medidesk_config::{DatabaseBackend, DatabaseConfig};
use medidesk_core::{MedideskError, MedideskResult};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Connection pool for the configured backend.
#[derive(Clone)]
pub enum DatabasePool {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DatabasePool {
    /// Connects to the database named by `config.url`.
    ///
    /// Runs pending migrations when `config.run_migrations` is set.
    pub async fn connect(config: &DatabaseConfig) -> MedideskResult<Self> {
        let pool = match config.backend() {
            Some(DatabaseBackend::Postgres) => Self::connect_postgres(config).await?,
            Some(DatabaseBackend::Sqlite) => Self::connect_sqlite(config).await?,
            None => {
                return Err(MedideskError::Configuration(format!(
                    "Unsupported database URL: {}",
                    redact(&config.url)
                )))
            }
        };

        if config.run_migrations {
            pool.run_migrations().await?;
        }
        Ok(pool)
    }

    async fn connect_postgres(config: &DatabaseConfig) -> MedideskResult<Self> {
        info!("Connecting to PostgreSQL database...");

        let mut options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| MedideskError::Configuration(format!("Invalid database URL: {e}")))?
            .options([(
                "statement_timeout",
                format!("{}ms", config.statement_timeout().as_millis()),
            )]);
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                MedideskError::Store(format!("Failed to connect: {e}"))
            })?;

        info!("PostgreSQL connection pool established");
        Ok(Self::Postgres(pool))
    }

    async fn connect_sqlite(config: &DatabaseConfig) -> MedideskResult<Self> {
        info!("Opening SQLite database...");

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| MedideskError::Configuration(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(config.statement_timeout());
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        // Every connection to `:memory:` opens a separate database, so the
        // pool keeps exactly one connection alive for its whole lifetime.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .idle_timeout(Some(config.idle_timeout()))
        };

        let pool = pool_options
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to open database: {}", e);
                MedideskError::Store(format!("Failed to connect: {e}"))
            })?;

        info!("SQLite connection pool established");
        Ok(Self::Sqlite(pool))
    }

    /// Returns the backend this pool talks to.
    #[must_use]
    pub const fn backend(&self) -> DatabaseBackend {
        match self {
            Self::Postgres(_) => DatabaseBackend::Postgres,
            Self::Sqlite(_) => DatabaseBackend::Sqlite,
        }
    }

    /// Returns a querier sharing this pool.
    #[must_use]
    pub fn querier(&self) -> Arc<dyn Querier> {
        match self {
            Self::Postgres(pool) => Arc::new(PgQueries::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteQueries::new(pool.clone())),
        }
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> MedideskResult<()> {
        let result = match self {
            Self::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Self::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        };
        result.map_err(|e| MedideskError::Store(format!("Health check failed: {e}")))
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> MedideskResult<()> {
        info!("Running {} migrations...", self.backend());
        match self {
            Self::Postgres(pool) => sqlx::migrate!("../../migrations/postgres").run(pool).await?,
            Self::Sqlite(pool) => sqlx::migrate!("../../migrations/sqlite").run(pool).await?,
        }
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (size, num_idle) = match self {
            Self::Postgres(pool) => (pool.size(), pool.num_idle()),
            Self::Sqlite(pool) => (pool.size(), pool.num_idle()),
        };
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend())
            .field("size", &size)
            .field("num_idle", &num_idle)
            .finish()
    }
}

/// Strips credentials from a URL before it is logged.
fn redact(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            let _ = parsed.set_password(Some("***"));
            parsed.to_string()
        }
        Ok(parsed) => parsed.to_string(),
        Err(_) => "<unparseable>".to_string(),
    }
}
