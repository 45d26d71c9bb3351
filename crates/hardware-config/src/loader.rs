//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File, Map};
use hardware_core::HardwareError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix of structured environment overrides (`HARDWARE_SERVER__PORT`).
pub const ENV_PREFIX: &str = "HARDWARE";

/// Loads [`AppConfig`] from files and environment variables.
///
/// Sources, lowest precedence first:
/// 1. Built-in defaults
/// 2. `{config_dir}/default.toml`
/// 3. `{config_dir}/{environment}.toml`
/// 4. `{config_dir}/local.toml` (not committed to version control)
/// 5. `HARDWARE_*` environment variables, `__` between nested keys
/// 6. `DATABASE_URL`, `FRONTEND_URL`, `SECRET_KEY` and `PORT`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    vars: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Creates a loader reading from `config_dir` and the process environment.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            vars: None,
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Replaces the process environment with a fixed set of variables.
    ///
    /// `.env` files are not read when an explicit environment is given.
    #[must_use]
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = Some(vars);
        self
    }

    fn var(&self, name: &str) -> Option<String> {
        match &self.vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
        .filter(|value| !value.trim().is_empty())
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, HardwareError> {
        if self.vars.is_none() {
            if let Err(e) = dotenvy::dotenv() {
                debug!("No .env file found or error loading it: {}", e);
            }
        }

        let environment = self
            .var("HARDWARE_ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        let mut env_source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true);
        if let Some(vars) = &self.vars {
            env_source = env_source.source(Some(vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect::<Map<_, _>>()));
        }
        builder = builder.add_source(env_source);

        let frontend_origins = self.var("FRONTEND_URL").map(|value| {
            value
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect::<Vec<_>>()
        });

        let config = builder
            .set_override("app.environment", environment)
            .and_then(|b| b.set_override_option("database.url", self.var("DATABASE_URL")))
            .and_then(|b| b.set_override_option("security.secret_key", self.var("SECRET_KEY")))
            .and_then(|b| b.set_override_option("server.port", self.var("PORT")))
            .and_then(|b| b.set_override_option("server.cors_origins", frontend_origins))
            .and_then(|b| b.build())
            .map_err(config_error_to_hardware_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_hardware_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, warning about insecure development defaults.
    fn validate_config(config: &AppConfig) -> Result<(), HardwareError> {
        ConfigValidator::validate(config)
            .map_err(|errors| HardwareError::Configuration(format_validation_errors(&errors)))?;

        if config.security.uses_default_secret() {
            warn!("Using the built-in secret key; set SECRET_KEY before deploying");
        }
        if config.server.allows_any_origin() {
            debug!("CORS allows any origin");
        }

        Ok(())
    }
}

fn config_error_to_hardware_error(err: ConfigError) -> HardwareError {
    HardwareError::Configuration(err.to_string())
}
