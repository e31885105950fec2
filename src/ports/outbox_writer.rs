//! OutboxWriter port - Interface for transactional event persistence.
//!
//! The synchronous in-process dispatch offers no compensation when a
//! publish fails after a save. Writing events to an outbox in the same
//! transaction as the aggregate and relaying them in the background is
//! the hardening path; this port defines that outbox.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Status of an outbox entry in the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutboxStatus {
    /// Event written but not yet published
    Pending,
    /// Event successfully published
    Published,
    /// Event failed to publish (will be retried)
    Failed,
}

/// An entry in the event outbox table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// Unique identifier for this outbox entry
    pub id: Uuid,

    /// The domain event envelope
    pub event: EventEnvelope,

    /// Current delivery status
    pub status: OutboxStatus,

    /// When the event was written to the outbox
    pub created_at: DateTime<Utc>,

    /// When the event was last processed (published or failed)
    pub processed_at: Option<DateTime<Utc>>,

    /// Number of publish attempts
    pub attempts: u32,

    /// Last error message if failed
    pub last_error: Option<String>,

    /// Partition key for future sharding (typically the aggregate id)
    pub partition_key: String,
}

impl OutboxEntry {
    /// Create a new pending outbox entry for an event.
    pub fn new(event: EventEnvelope, partition_key: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            status: OutboxStatus::Pending,
            created_at: Utc::now(),
            processed_at: None,
            attempts: 0,
            last_error: None,
            partition_key: partition_key.into(),
        }
    }

    /// Mark the entry as successfully published.
    pub fn mark_published(&mut self) {
        self.status = OutboxStatus::Published;
        self.processed_at = Some(Utc::now());
        self.attempts += 1;
    }

    /// Mark the entry as failed with an error.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = OutboxStatus::Failed;
        self.processed_at = Some(Utc::now());
        self.attempts += 1;
        self.last_error = Some(error.into());
    }
}

/// Port for writing events to the transactional outbox.
///
/// Implementations should be called within the same database
/// transaction as the aggregate save, so either both the state change
/// and its events are durable or neither is.
#[async_trait]
pub trait OutboxWriter: Send + Sync {
    /// Write a single event to the outbox.
    async fn write(
        &self,
        event: &EventEnvelope,
        partition_key: &str,
    ) -> Result<OutboxEntry, DomainError>;

    /// Write multiple events to the outbox atomically.
    async fn write_batch(
        &self,
        events: &[EventEnvelope],
        partition_key: &str,
    ) -> Result<Vec<OutboxEntry>, DomainError>;

    /// Get pending events for processing (used by the relay).
    ///
    /// Returns events ordered by creation time.
    async fn get_pending(&self, limit: u32) -> Result<Vec<OutboxEntry>, DomainError>;

    /// Mark an event as successfully published.
    async fn mark_published(&self, id: Uuid) -> Result<(), DomainError>;

    /// Mark an event as failed.
    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), DomainError>;

    /// Clean up published events older than the given age in hours.
    ///
    /// Returns the number of entries deleted.
    async fn cleanup_old(&self, older_than_hours: u32) -> Result<u64, DomainError>;
}
