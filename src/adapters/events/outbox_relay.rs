//! OutboxRelay - Background service publishing outbox entries.
//!
//! Second half of the transactional outbox pattern: command handlers
//! write events to the outbox in the same transaction as the aggregate,
//! and this relay polls pending entries and publishes them, marking
//! failures for retry on the next poll. This is the hardening path for
//! the save-succeeded-publish-failed window of the synchronous
//! dispatcher.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::DomainError;
use crate::ports::{EventPublisher, OutboxWriter};

/// Configuration for the OutboxRelay service.
#[derive(Debug, Clone)]
pub struct OutboxRelayConfig {
    /// How often to poll for unpublished events.
    pub poll_interval: Duration,

    /// Maximum events to process per poll cycle.
    pub batch_size: u32,
}

impl Default for OutboxRelayConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            batch_size: 100,
        }
    }
}

impl OutboxRelayConfig {
    /// Create config with custom poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create config with custom batch size.
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }
}

/// Background service that publishes events from the outbox.
pub struct OutboxRelay {
    outbox: Arc<dyn OutboxWriter>,
    event_publisher: Arc<dyn EventPublisher>,
    config: OutboxRelayConfig,
}

impl OutboxRelay {
    /// Create a new OutboxRelay with default configuration.
    pub fn new(outbox: Arc<dyn OutboxWriter>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            outbox,
            event_publisher,
            config: OutboxRelayConfig::default(),
        }
    }

    /// Create a new OutboxRelay with custom configuration.
    pub fn with_config(
        outbox: Arc<dyn OutboxWriter>,
        event_publisher: Arc<dyn EventPublisher>,
        config: OutboxRelayConfig,
    ) -> Self {
        Self {
            outbox,
            event_publisher,
            config,
        }
    }

    /// Run the relay loop until the shutdown signal flips to true.
    ///
    /// Processes one final batch after the signal before returning.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<(), DomainError> {
        let mut interval = time::interval(self.config.poll_interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        self.process_batch().await?;
                        return Ok(());
                    }
                }

                _ = interval.tick() => {
                    self.process_batch().await?;
                }
            }
        }
    }

    /// Process a single batch of pending events.
    ///
    /// Returns the number of successfully published entries.
    pub async fn process_batch(&self) -> Result<usize, DomainError> {
        let entries = self.outbox.get_pending(self.config.batch_size).await?;
        let mut published_count = 0;

        for entry in entries {
            match self.event_publisher.publish(entry.event.clone()).await {
                Ok(()) => {
                    self.outbox.mark_published(entry.id).await?;
                    published_count += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        event_id = %entry.event.event_id,
                        attempts = entry.attempts + 1,
                        error = %e,
                        "failed to publish outbox entry"
                    );
                    self.outbox.mark_failed(entry.id, &e.to_string()).await?;
                }
            }
        }

        Ok(published_count)
    }

    /// Run exactly one poll cycle (for testing).
    pub async fn poll_once(&self) -> Result<usize, DomainError> {
        self.process_batch().await
    }
}
