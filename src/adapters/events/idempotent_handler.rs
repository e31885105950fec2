//! IdempotentHandler - Wrapper ensuring at-most-once event processing.
//!
//! Wraps any `EventHandler` and uses a `ProcessedEventStore` to skip
//! envelopes the handler has already processed. The check runs before
//! delegation; the mark happens only after success, so a failed handler
//! is retried on the next delivery.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::{EventHandler, ProcessedEventStore};

/// Decorator ensuring at-most-once processing per handler.
///
/// Uses the inner handler's `name()` as the idempotency key alongside
/// the event id.
pub struct IdempotentHandler<H: EventHandler> {
    inner: H,
    processed_events: Arc<dyn ProcessedEventStore>,
}

impl<H: EventHandler> IdempotentHandler<H> {
    /// Create a new IdempotentHandler wrapping the given handler.
    pub fn new(inner: H, processed_events: Arc<dyn ProcessedEventStore>) -> Self {
        Self {
            inner,
            processed_events,
        }
    }
}

#[async_trait]
impl<H: EventHandler + 'static> EventHandler for IdempotentHandler<H> {
    async fn handle(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        let handler_name = self.inner.name();

        if self
            .processed_events
            .contains(&envelope.event_id, handler_name)
            .await?
        {
            tracing::debug!(
                event_id = %envelope.event_id,
                handler = handler_name,
                "skipping duplicate event"
            );
            return Ok(());
        }

        self.inner.handle(envelope.clone()).await?;

        self.processed_events
            .mark_processed(&envelope.event_id, handler_name)
            .await?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
