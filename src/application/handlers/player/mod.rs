//! Player module event handlers (reactive).
//!
//! The Player module mutates only in reaction to Group events; there
//! are no Player commands.

mod master_audit;
mod roster_projection;

pub use master_audit::MasterAuditHandler;
pub use roster_projection::{RosterProjection, ROSTER_EVENT_TYPES};
