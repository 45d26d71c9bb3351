//! Configuration validation.
//!
//! Every rule runs and all violations are reported together, so a bad
//! deployment fails at startup with the full list instead of at the first
//! request.

use crate::{AppConfig, DatabaseConfig, ObservabilityConfig, SecurityConfig, ServerConfig};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Signing secret is empty.
    EmptySecret,
    /// Signing secret is too short for production use.
    SecretTooShort { actual: usize, minimum: usize },
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Token lifetime exceeds the allowed maximum.
    TokenLifetimeTooLong { value: u64, maximum: u64 },
    /// Password hash cost is invalid.
    InvalidHashCost { value: u32, minimum: u32, maximum: u32 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "Secret key must not be empty"),
            Self::SecretTooShort { actual, minimum } => {
                write!(
                    f,
                    "Secret key too short for production: {} characters (minimum {})",
                    actual, minimum
                )
            }
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {} exceeds maximum allowed ({})", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout '{}' must be positive", name)
            }
            Self::TokenLifetimeTooLong { value, maximum } => {
                write!(
                    f,
                    "Access token lifetime {} seconds exceeds maximum allowed ({})",
                    value, maximum
                )
            }
            Self::InvalidHashCost { value, minimum, maximum } => {
                write!(
                    f,
                    "Invalid password hash cost: {} (must be between {} and {})",
                    value, minimum, maximum
                )
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: pretty, json)", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Minimum secret length in production.
    const MIN_SECRET_LENGTH: usize = 32;
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 100;
    /// Argon2 memory cost bounds in MiB.
    const MIN_HASH_COST: u32 = 1;
    const MAX_HASH_COST: u32 = 256;
    /// Longest access token lifetime: 30 days.
    const MAX_TOKEN_LIFETIME_SECS: u64 = 30 * 24 * 60 * 60;
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_security(&config.security, config.app.is_production(), &mut errors);
        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_security(config: &SecurityConfig, production: bool, errors: &mut Vec<ConfigValidationError>) {
        if config.secret_key.is_empty() {
            errors.push(ConfigValidationError::EmptySecret);
        } else if production && config.secret_key.len() < Self::MIN_SECRET_LENGTH {
            errors.push(ConfigValidationError::SecretTooShort {
                actual: config.secret_key.len(),
                minimum: Self::MIN_SECRET_LENGTH,
            });
        }

        if !(Self::MIN_HASH_COST..=Self::MAX_HASH_COST).contains(&config.password_hash_cost) {
            errors.push(ConfigValidationError::InvalidHashCost {
                value: config.password_hash_cost,
                minimum: Self::MIN_HASH_COST,
                maximum: Self::MAX_HASH_COST,
            });
        }

        if config.access_token_expiration_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "security.access_token_expiration_secs".to_string(),
            });
        } else if config.access_token_expiration_secs > Self::MAX_TOKEN_LIFETIME_SECS {
            errors.push(ConfigValidationError::TokenLifetimeTooLong {
                value: config.access_token_expiration_secs,
                maximum: Self::MAX_TOKEN_LIFETIME_SECS,
            });
        }
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort { value: config.port });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }

        for origin in config.cors_origins.iter().map(|o| o.trim()).filter(|o| *o != "*") {
            if let Err(e) = Url::parse(origin) {
                errors.push(ConfigValidationError::InvalidUrl {
                    url_type: "CORS origin".to_string(),
                    message: format!("{}: {}", origin, e),
                });
            }
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("sqlite:") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with sqlite:".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
        if config.idle_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
            });
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
