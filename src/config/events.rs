//! Event delivery configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the event pipeline: outbox relay cadence and the
/// retention of processed-event records used for handler idempotency.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// How often the outbox relay polls for pending entries, in
    /// milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub outbox_poll_interval_ms: u64,

    /// Maximum outbox entries published per poll cycle.
    #[serde(default = "default_batch_size")]
    pub outbox_batch_size: u32,

    /// How long processed-event records are kept, in hours.
    #[serde(default = "default_retention_hours")]
    pub processed_retention_hours: u32,
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_batch_size() -> u32 {
    100
}

fn default_retention_hours() -> u32 {
    72
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            outbox_poll_interval_ms: default_poll_interval_ms(),
            outbox_batch_size: default_batch_size(),
            processed_retention_hours: default_retention_hours(),
        }
    }
}

impl EventsConfig {
    /// Poll interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.outbox_poll_interval_ms)
    }

    /// Validate the section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.outbox_poll_interval_ms < 10 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.outbox_batch_size == 0 || self.outbox_batch_size > 1000 {
            return Err(ValidationError::InvalidBatchSize);
        }
        if self.processed_retention_hours == 0 {
            return Err(ValidationError::InvalidRetention);
        }
        Ok(())
    }
}
