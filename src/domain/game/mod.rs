//! Match domain module (named `game` to keep clear of the `match` keyword).
//!
//! Schedules matches within groups and collects player registrations.
//!
//! # Events
//!
//! - `MatchCreated` - New match scheduled
//! - `PlayerRegistered` - Player signed up
//! - `MatchCancelled` - Match called off

mod aggregate;
mod errors;
mod events;
mod values;

pub use aggregate::{Match, MatchStatus};
pub use errors::MatchError;
pub use events::{MatchCancelled, MatchCreated, PlayerRegistered};
pub use values::{validate_max_players, Location, MAX_LOCATION_LENGTH, MAX_PLAYERS, MIN_PLAYERS};
