//! ProcessedEventStore port - Interface for tracking processed events.
//!
//! Enables idempotent event handling by tracking which events have been
//! processed by which handlers. Events can arrive more than once: the
//! publish step retries after partial failures, and there is no broker
//! acknowledging delivery.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, Timestamp};

/// Port for tracking which events have been processed by which handlers.
///
/// Each handler has its own processing record, allowing different
/// handlers to process the same event independently while staying
/// idempotent within each handler.
#[async_trait]
pub trait ProcessedEventStore: Send + Sync {
    /// Check if an event has been processed by a specific handler.
    async fn contains(&self, event_id: &EventId, handler_name: &str)
        -> Result<bool, DomainError>;

    /// Mark an event as processed by a specific handler.
    ///
    /// Called AFTER successful handling so a failed handler is retried
    /// on redelivery.
    async fn mark_processed(
        &self,
        event_id: &EventId,
        handler_name: &str,
    ) -> Result<(), DomainError>;

    /// Delete entries older than the given timestamp (retention policy).
    ///
    /// Returns the number of entries deleted.
    async fn delete_before(&self, timestamp: Timestamp) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tokio::sync::RwLock;

    /// In-memory implementation exercising the contract.
    struct InMemoryProcessedEventStore {
        processed: RwLock<HashSet<(String, String)>>,
    }

    impl InMemoryProcessedEventStore {
        fn new() -> Self {
            Self {
                processed: RwLock::new(HashSet::new()),
            }
        }
    }

    #[async_trait]
    impl ProcessedEventStore for InMemoryProcessedEventStore {
        async fn contains(
            &self,
            event_id: &EventId,
            handler_name: &str,
        ) -> Result<bool, DomainError> {
            let key = (event_id.as_str().to_string(), handler_name.to_string());
            Ok(self.processed.read().await.contains(&key))
        }

        async fn mark_processed(
            &self,
            event_id: &EventId,
            handler_name: &str,
        ) -> Result<(), DomainError> {
            let key = (event_id.as_str().to_string(), handler_name.to_string());
            self.processed.write().await.insert(key);
            Ok(())
        }

        async fn delete_before(&self, _timestamp: Timestamp) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn contains_returns_false_for_new_event() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::new();

        assert!(!store.contains(&event_id, "TestHandler").await.unwrap());
    }

    #[tokio::test]
    async fn contains_returns_true_after_mark_processed() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::from_string("evt-123");

        store.mark_processed(&event_id, "TestHandler").await.unwrap();

        assert!(store.contains(&event_id, "TestHandler").await.unwrap());
    }

    #[tokio::test]
    async fn different_handlers_track_separately() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::from_string("evt-456");

        store.mark_processed(&event_id, "HandlerA").await.unwrap();

        assert!(store.contains(&event_id, "HandlerA").await.unwrap());
        assert!(!store.contains(&event_id, "HandlerB").await.unwrap());
    }

    #[tokio::test]
    async fn mark_processed_is_idempotent() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::from_string("evt-789");

        store.mark_processed(&event_id, "TestHandler").await.unwrap();
        store.mark_processed(&event_id, "TestHandler").await.unwrap();

        assert!(store.contains(&event_id, "TestHandler").await.unwrap());
    }
}
