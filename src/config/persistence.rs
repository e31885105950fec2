//! Persistence configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Settings the repository adapters must honor.
///
/// The timeout budget is enforced by the adapter making the blocking
/// call, not by the domain core.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Budget for a single persistence operation, in seconds.
    #[serde(default = "default_operation_timeout_secs")]
    pub operation_timeout_secs: u64,
}

fn default_operation_timeout_secs() -> u64 {
    10
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            operation_timeout_secs: default_operation_timeout_secs(),
        }
    }
}

impl PersistenceConfig {
    /// Operation timeout as a `Duration`.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    /// Validate the section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.operation_timeout_secs == 0 || self.operation_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}
