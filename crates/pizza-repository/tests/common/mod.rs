//! Common test infrastructure for database integration tests.

use pizza_config::DatabaseConfig;
use pizza_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE user_info (
        id SERIAL PRIMARY KEY,
        login TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        email TEXT NOT NULL,
        phone BIGINT NOT NULL,
        address TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE dish (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price INTEGER NOT NULL,
        description TEXT NOT NULL,
        image_url TEXT NOT NULL,
        tags JSONB
    )
    ",
];

/// Test database container wrapper.
///
/// Manages a Postgres testcontainer lifecycle and provides a database pool.
pub struct TestDatabase {
    _container: ContainerAsync<Postgres>,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new test database with a fresh Postgres container and schema.
    pub async fn new() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start Postgres container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get Postgres port");

        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port,
            user: "postgres".to_string(),
            name: "postgres".to_string(),
            password: "postgres".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        let pool = Self::connect_with_retry(&config, 30).await;

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(pool.inner())
                .await
                .expect("Failed to create schema");
        }

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    /// Returns the pool as the injected interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }

    /// Inserts a dish row with a raw tags value.
    pub async fn insert_dish(&self, name: &str, price: i32, tags: Option<&str>) {
        sqlx::query(
            "INSERT INTO dish (name, price, description, image_url, tags) VALUES ($1, $2, $3, $4, $5::jsonb)",
        )
        .bind(name)
        .bind(price)
        .bind(format!("{name} description"))
        .bind(format!("https://img/{name}.png"))
        .bind(tags)
        .execute(self.pool.inner())
        .await
        .expect("Failed to insert dish");
    }

    /// Connects to the database with retry logic.
    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabasePool {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let attempt = match DatabasePool::connect(config).await {
                Ok(pool) => pool.health_check().await.map(|()| pool),
                Err(e) => Err(e),
            };
            match attempt {
                Ok(pool) => return pool,
                Err(e) => {
                    assert!(
                        attempts < max_attempts,
                        "Failed to connect to database after {max_attempts} attempts: {e}"
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
