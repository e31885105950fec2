//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//! - `ProcessedEventStore` - Idempotency tracking for event handlers
//! - `OutboxWriter` - Transactional event persistence (hardening path)
//!
//! ## Repository Ports
//!
//! One write-side repository per aggregate; `update` enforces
//! optimistic concurrency everywhere.
//!
//! ## Cross-module Ports
//!
//! - `GroupQueries` - Narrow read-only questions answered by the Group
//!   module mid-command

mod event_publisher;
mod event_subscriber;
mod group_queries;
mod group_repository;
mod match_repository;
mod message_repository;
mod outbox_writer;
mod player_repository;
mod processed_event_store;
mod user_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use group_queries::GroupQueries;
pub use group_repository::GroupRepository;
pub use match_repository::MatchRepository;
pub use message_repository::MessageRepository;
pub use outbox_writer::{OutboxEntry, OutboxStatus, OutboxWriter};
pub use player_repository::PlayerRepository;
pub use processed_event_store::ProcessedEventStore;
pub use user_repository::UserRepository;
