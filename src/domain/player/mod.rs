//! Player domain module.
//!
//! Keeps a per-(user, group) roster record mirroring role and status,
//! mutated only in reaction to Group events.
//!
//! # Events
//!
//! - `NewMasterAppointed` - Published when a record transitions into Master

mod aggregate;
mod events;

pub use aggregate::PlayerRecord;
pub use events::NewMasterAppointed;
