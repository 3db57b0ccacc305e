//! Server startup utilities.

use pizza_config::{ObservabilityConfig, ServerConfig};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the fallback filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(format!("{log_level},pizza=debug,tower_http=debug"))
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Installing twice is a no-op.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.is_json() {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
        ____  _
       / __ \(_)_______ ____ _
      / /_/ / /_  /_  // __ `/
     / ____/ / / /_/ /_/ /_/ /
    /_/   /_/ /___/___/\__,_/

            Ordering Backend
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}", server.addr());
    info!("Health:    http://{}/health", server.addr());
    info!("API Docs:  http://{}/api-docs/openapi.json", server.addr());
    info!("CORS:      {}", if server.cors_enabled { "permissive" } else { "disabled" });
    info!("{}", separator);
}
