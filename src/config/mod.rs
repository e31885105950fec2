//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `MATCHDAY` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use matchday::config::RuntimeConfig;
//!
//! let config = RuntimeConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("outbox poll every {:?}", config.events.poll_interval());
//! ```

mod error;
mod events;
mod features;
mod persistence;

pub use error::{ConfigError, ValidationError};
pub use events::EventsConfig;
pub use features::FeatureFlags;
pub use persistence::PersistenceConfig;

use serde::Deserialize;

/// Root runtime configuration
///
/// Every section has workable defaults, so an empty environment yields
/// a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Event pipeline settings (outbox relay, idempotency retention)
    #[serde(default)]
    pub events: EventsConfig,

    /// Persistence settings (operation timeout budget)
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MATCHDAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MATCHDAY__EVENTS__OUTBOX_BATCH_SIZE=50` -> `events.outbox_batch_size = 50`
    /// - `MATCHDAY__PERSISTENCE__OPERATION_TIMEOUT_SECS=5` -> `persistence.operation_timeout_secs = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MATCHDAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.events.validate()?;
        self.persistence.validate()?;
        Ok(())
    }
}
