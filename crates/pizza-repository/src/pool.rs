//! Database connection pool management.

use async_trait::async_trait;
use pizza_config::DatabaseConfig;
use pizza_core::{HealthCheck, HealthStatus, Interface, PizzaError, PizzaResult};
use shaku::Component;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying Postgres pool.
    fn inner(&self) -> &PgPool;

    /// Runs `SELECT 1` against the pool.
    async fn health_check(&self) -> PizzaResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens a pool from configuration.
    ///
    /// Only opens the pool; call [`health_check`](Self::health_check) to
    /// confirm the database actually answers.
    pub async fn connect(config: &DatabaseConfig) -> PizzaResult<Self> {
        info!(
            host = %config.host,
            database = %config.name,
            ssl_mode = %config.ssl_mode,
            "Connecting to Postgres database..."
        );

        let options = connect_options(config)?;
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                PizzaError::Connection(format!("Failed to connect: {e}"))
            })?;

        info!("Postgres connection pool established");
        Ok(Self { pool })
    }

    /// Wraps a pre-existing pool (for Shaku injection and tests).
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Component parameters sharing this pool with a Shaku module.
    #[must_use]
    pub fn parameters(&self) -> DatabasePoolParameters {
        DatabasePoolParameters {
            pool: self.pool.clone(),
        }
    }

    /// Checks that the database answers.
    pub async fn health_check(&self) -> PizzaResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| PizzaError::Connection(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

/// Builds libpq-style connect options from the database section.
fn connect_options(config: &DatabaseConfig) -> PizzaResult<PgConnectOptions> {
    let ssl_mode = PgSslMode::from_str(&config.ssl_mode)
        .map_err(|e| PizzaError::Configuration(format!("invalid ssl mode '{}': {e}", config.ssl_mode)))?;

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.name)
        .ssl_mode(ssl_mode);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    Ok(options)
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &PgPool {
        &self.pool
    }

    async fn health_check(&self) -> PizzaResult<()> {
        DatabasePool::health_check(self).await
    }

    async fn close(&self) {
        DatabasePool::close(self).await;
    }
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        match DatabasePool::health_check(self).await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
