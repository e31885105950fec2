//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous in-process fan-out dispatcher
//! - `IdempotentHandler` - Wrapper for at-most-once event processing
//! - `OutboxRelay` - Background service for reliable event delivery

mod idempotent_handler;
mod in_memory;
mod outbox_relay;

pub use idempotent_handler::IdempotentHandler;
pub use in_memory::InMemoryEventBus;
pub use outbox_relay::{OutboxRelay, OutboxRelayConfig};
