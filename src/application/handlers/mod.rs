//! Application handlers.
//!
//! Command handlers (Group, Match) apply the uniform write shape: load
//! aggregate, invoke domain method, persist, publish staged events.
//! Event handlers (Player, User) react to published events with
//! idempotent mutations of their own module's state.

pub mod game;
pub mod group;
pub mod player;
pub mod user;

use crate::domain::foundation::{CommandMetadata, EventEnvelope};

/// Stamp command context onto staged envelopes before publishing.
pub(crate) fn stamped(
    events: Vec<EventEnvelope>,
    metadata: &CommandMetadata,
) -> Vec<EventEnvelope> {
    let correlation_id = metadata.correlation_id();
    events
        .into_iter()
        .map(|envelope| {
            let envelope = envelope
                .with_correlation_id(correlation_id.clone())
                .with_user_id(metadata.user_id.to_string());
            match metadata.trace_id() {
                Some(trace_id) => envelope.with_trace_id(trace_id),
                None => envelope,
            }
        })
        .collect()
}
