//! Pending-event queue composed into every aggregate root.
//!
//! Aggregates stage the events describing a state change in the same
//! operation that performs the change. The queue is drained only by the
//! publishing step after a successful save; domain logic only appends.
//!
//! The queue is a composed field rather than a base type, so aggregates
//! are free to combine it with other shared capabilities.

use super::EventEnvelope;

/// Ordered queue of staged domain events (insertion order = causal order).
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<EventEnvelope>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Appends an event to the queue.
    pub fn record(&mut self, envelope: EventEnvelope) {
        self.pending.push(envelope);
    }

    /// Returns the staged events without clearing them.
    pub fn pending(&self) -> &[EventEnvelope] {
        &self.pending
    }

    /// Drains the staged events, leaving the queue empty.
    ///
    /// Called by the publishing step once the aggregate is saved.
    pub fn take(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.pending)
    }

    /// Resets the queue to empty, discarding staged events.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of staged events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Common surface of every aggregate root, for generic publish helpers.
pub trait AggregateRoot {
    /// Identity of the aggregate as a string (matches envelope aggregate_id).
    fn aggregate_id(&self) -> String;

    /// Current optimistic-concurrency version.
    fn version(&self) -> u64;

    /// Events staged since the aggregate was loaded.
    fn pending_events(&self) -> &[EventEnvelope];

    /// Drains the staged events for publishing.
    fn take_events(&mut self) -> Vec<EventEnvelope>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, "agg-1", "Test", serde_json::json!({}))
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = EventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut queue = EventQueue::new();
        queue.record(envelope("first"));
        queue.record(envelope("second"));
        queue.record(envelope("third"));

        let types: Vec<_> = queue.pending().iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(types, vec!["first", "second", "third"]);
    }

    #[test]
    fn pending_does_not_clear() {
        let mut queue = EventQueue::new();
        queue.record(envelope("evt"));

        assert_eq!(queue.pending().len(), 1);
        assert_eq!(queue.pending().len(), 1);
    }

    #[test]
    fn take_drains_the_queue() {
        let mut queue = EventQueue::new();
        queue.record(envelope("evt-a"));
        queue.record(envelope("evt-b"));

        let drained = queue.take();

        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards_staged_events() {
        let mut queue = EventQueue::new();
        queue.record(envelope("evt"));
        queue.clear();
        assert!(queue.is_empty());
    }
}
