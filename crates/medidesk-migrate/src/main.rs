//! # Medidesk Migrate
//!
//! Loads configuration, applies pending migrations for the configured
//! backend and verifies the store answers queries.
//!
//! The configuration directory defaults to `./config` and can be moved with
//! `MEDIDESK_CONFIG_DIR`.

use medidesk_config::{AppConfig, ConfigLoader};
use medidesk_core::telemetry::init_telemetry;
use medidesk_core::MedideskResult;
use medidesk_repository::DatabasePool;
use tracing::{error, info};

const CONFIG_DIR_VAR: &str = "MEDIDESK_CONFIG_DIR";

#[tokio::main]
async fn main() {
    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("medidesk-migrate: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = init_telemetry(&config.logging) {
        eprintln!("medidesk-migrate: {e}");
        std::process::exit(2);
    }

    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Migration failed [{}]: {}", e.error_code(), e);
        std::process::exit(1);
    }
}

async fn load_config() -> MedideskResult<AppConfig> {
    let config_dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "./config".to_string());
    let loader = ConfigLoader::new(config_dir)?;
    Ok(loader.get().await)
}

async fn run(config: AppConfig) -> MedideskResult<()> {
    let mut database = config.database;
    database.run_migrations = false;

    let pool = DatabasePool::connect(&database).await?;
    let result = migrate(&pool).await;
    pool.close().await;
    result
}

async fn migrate(pool: &DatabasePool) -> MedideskResult<()> {
    pool.run_migrations().await?;
    pool.health_check().await?;
    info!("{} store is up to date", pool.backend());
    Ok(())
}
