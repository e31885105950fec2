//! Adapters - Implementations of the ports.
//!
//! Only the adapters with in-process semantics live here; database and
//! transport adapters are external collaborators.

pub mod events;
pub mod queries;

pub use events::{IdempotentHandler, InMemoryEventBus, OutboxRelay, OutboxRelayConfig};
pub use queries::LocalGroupQueries;
