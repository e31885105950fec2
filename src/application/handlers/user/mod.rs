//! User module event handlers (reactive).
//!
//! The User module tracks group memberships and notification messages,
//! mutated only in reaction to Group and Match events.

mod invitation_notifier;
mod match_notifier;
mod membership_tracker;

pub use invitation_notifier::InvitationNotifier;
pub use match_notifier::MatchNotifier;
pub use membership_tracker::{MembershipTracker, MEMBERSHIP_EVENT_TYPES};
