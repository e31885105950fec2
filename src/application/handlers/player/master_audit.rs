//! MasterAuditHandler - Reserved consumer for Master appointments.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// No-op subscriber for `player.new_master_appointed`.
///
/// Keeps the subscription slot occupied so an audit trail or a
/// notification can be added without touching the wiring. Trivially
/// idempotent.
pub struct MasterAuditHandler;

#[async_trait]
impl EventHandler for MasterAuditHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::debug!(
            event_id = %event.event_id,
            aggregate_id = %event.aggregate_id,
            "master appointment observed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MasterAuditHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_any_envelope() {
        let handler = MasterAuditHandler;
        let envelope = EventEnvelope::test_fixture();

        assert!(handler.handle(envelope.clone()).await.is_ok());
        assert!(handler.handle(envelope).await.is_ok());
    }
}
