//! # Pizza Server
//!
//! Main entry point for the pizza ordering backend.
//!
//! Startup order: configuration, logging, database, dependency injection,
//! HTTP listener. A failure in any step exits with status 1.

use pizza_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use pizza_core::{HealthCheck, PizzaError, PizzaResult};
use pizza_repository::DatabasePool;
use pizza_rest::create_router;
use pizza_server::{
    di::build_app_module,
    startup::{init_logging, print_banner, print_startup_info},
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();

    info!("Starting {} server...", config.app.name);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn load_config() -> PizzaResult<AppConfig> {
    Ok(ConfigLoader::from_default_location()?.into_config())
}

async fn run(config: AppConfig) -> PizzaResult<()> {
    let db_pool = Arc::new(DatabasePool::connect(&config.database).await?);
    db_pool.health_check().await?;
    info!("Database answered liveness check");

    let module = build_app_module(&db_pool);
    let db_check: Arc<dyn HealthCheck> = db_pool.clone();
    let router = create_router(&*module, &config.server, vec![db_check]);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| PizzaError::internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config.server);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PizzaError::internal(format!("Server error: {e}")));

    db_pool.close().await;
    info!("Server shutdown complete");

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
