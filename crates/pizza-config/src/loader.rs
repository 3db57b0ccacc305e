//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use pizza_core::PizzaError;
use std::path::Path;
use tracing::{debug, info};

/// Deployment variables injected by the container environment.
///
/// These predate the layered files and always win over them. Empty values
/// count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentEnv {
    pub postgres_host: Option<String>,
    pub postgres_user: Option<String>,
    pub postgres_db: Option<String>,
    pub postgres_password: Option<String>,
    pub ssl_mode: Option<String>,
    pub server_port: Option<String>,
}

impl DeploymentEnv {
    /// Reads the deployment variables from the process environment.
    ///
    /// `SLLMODE` is accepted as a fallback for `SSLMODE`; existing compose
    /// files still carry that spelling.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            postgres_host: read_var("POSTGRES_HOST"),
            postgres_user: read_var("POSTGRES_USER"),
            postgres_db: read_var("POSTGRES_DB"),
            postgres_password: read_var("POSTGRES_PASSWORD"),
            ssl_mode: read_var("SSLMODE").or_else(|| read_var("SLLMODE")),
            server_port: read_var("SERVER_CONTAINER_PORT"),
        }
    }

    /// Parses `SERVER_CONTAINER_PORT`, if set.
    pub fn port(&self) -> Result<Option<u16>, PizzaError> {
        self.server_port
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|e| {
                    PizzaError::Configuration(format!(
                        "invalid SERVER_CONTAINER_PORT '{raw}': {e}"
                    ))
                })
            })
            .transpose()
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `PIZZA__` prefix
    /// 5. Deployment variables (`POSTGRES_*`, `SSLMODE`, `SERVER_CONTAINER_PORT`)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, PizzaError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        Self::with_deployment(config_dir, DeploymentEnv::from_process())
    }

    /// Creates a loader with explicit deployment variables.
    pub fn with_deployment(
        config_dir: impl Into<String>,
        deployment: DeploymentEnv,
    ) -> Result<Self, PizzaError> {
        let config = Self::load_config(&config_dir.into(), &deployment)?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, PizzaError> {
        Self::new("./config")
    }

    /// Consumes the loader, returning the validated configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str, deployment: &DeploymentEnv) -> Result<AppConfig, PizzaError> {
        let environment =
            std::env::var("PIZZA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder
            .add_source(
                Environment::with_prefix("PIZZA")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("app.environment", environment.clone())
            .map_err(config_error_to_pizza_error)?;

        let port = deployment.port()?;
        builder = builder
            .set_override_option("database.host", deployment.postgres_host.clone())
            .and_then(|b| b.set_override_option("database.user", deployment.postgres_user.clone()))
            .and_then(|b| b.set_override_option("database.name", deployment.postgres_db.clone()))
            .and_then(|b| {
                b.set_override_option("database.password", deployment.postgres_password.clone())
            })
            .and_then(|b| b.set_override_option("database.ssl_mode", deployment.ssl_mode.clone()))
            .and_then(|b| b.set_override_option("server.port", port.map(i64::from)))
            .map_err(config_error_to_pizza_error)?;

        let config = builder.build().map_err(config_error_to_pizza_error)?;

        if let Err(ConfigError::NotFound(_)) = config.get_int("server.port") {
            return Err(PizzaError::Configuration(
                "missing server port: set SERVER_CONTAINER_PORT or server.port".to_string(),
            ));
        }

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_pizza_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            PizzaError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }
}

fn config_error_to_pizza_error(err: ConfigError) -> PizzaError {
    PizzaError::Configuration(err.to_string())
}
