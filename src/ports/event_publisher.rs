//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how command handlers publish staged events without
//! knowing about the underlying transport mechanism.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (handlers may receive duplicates)
/// - `publish_all` preserves the given order and stops at the first
///   failing event, leaving later events unpublished
/// - Errors are propagated to the caller
///
/// Publishing happens strictly after the aggregate save. A publish
/// failure after a successful save leaves the state change durable with
/// the downstream reaction missing until redelivery; handlers therefore
/// must be idempotent.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
