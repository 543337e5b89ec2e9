//! # Configuration
//!
//! Settings for the report driver, loaded from defaults overlaid with
//! `TAXI_`-prefixed environment variables.
//!
//! | Variable               | Default   |
//! |------------------------|-----------|
//! | `TAXI_CURRENCY_SYMBOL` | `$`       |
//! | `TAXI_DECIMAL_PLACES`  | `2`       |
//! | `TAXI_LOG_LEVEL`       | `info`    |
//! | `TAXI_LOG_FORMAT`      | `compact` |
//!
//! # Examples
//!
//! ```
//! use taxi_income::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.currency_symbol, "$");
//! assert!(config.validate().is_ok());
//! ```

use crate::domain::value_objects::CurrencyFormat;
use crate::domain::value_objects::currency::{DEFAULT_DECIMAL_PLACES, DEFAULT_SYMBOL};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TAXI";

/// Highest number of fractional digits accepted for display.
pub const MAX_DECIMAL_PLACES: u32 = 8;

/// Default log filter directive.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Loading or deserializing failed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A loaded value is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Report driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Currency symbol placed before amounts.
    pub currency_symbol: String,
    /// Fractional digits shown for amounts.
    pub decimal_places: u32,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_SYMBOL.to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a variable cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment. Keys carry the `TAXI_` prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a variable cannot be parsed.
    pub fn from_vars(vars: HashMap<String, String>) -> ConfigResult<Self> {
        let source = vars.into_iter().collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(source)))
    }

    fn load(environment: Environment) -> ConfigResult<Self> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("decimal_places", i64::from(defaults.decimal_places))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format.to_string())?
            .add_source(environment.try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Checks the loaded values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the symbol is empty or more than
    /// [`MAX_DECIMAL_PLACES`] fractional digits are requested.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency_symbol.is_empty() {
            return Err(ConfigError::invalid("currency_symbol must not be empty"));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::invalid(format!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        Ok(())
    }

    /// Returns the currency format described by this configuration.
    #[must_use]
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.decimal_places)
    }

    /// Returns the logging settings.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}
