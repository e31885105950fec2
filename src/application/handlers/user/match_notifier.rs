//! MatchNotifier - Fan-out notification when a match is scheduled.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::domain::game::MatchCreated;
use crate::ports::{EventHandler, GroupQueries, MessageRepository};

use super::membership_tracker::{notify_once, parse};

/// Notifies every player of the owning group about a new match.
///
/// The roster is read through the cross-module query port and may be
/// stale; a player removed moments ago can still receive the
/// notification. The scheduling player is skipped. Per-player messages
/// are deduplicated on the causing event id, so a redelivery resumes a
/// partially-completed fan-out without duplicating earlier messages.
pub struct MatchNotifier {
    group_queries: Arc<dyn GroupQueries>,
    messages: Arc<dyn MessageRepository>,
}

impl MatchNotifier {
    /// Creates a new MatchNotifier.
    pub fn new(
        group_queries: Arc<dyn GroupQueries>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            group_queries,
            messages,
        }
    }
}

#[async_trait]
impl EventHandler for MatchNotifier {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let payload: MatchCreated = parse(&event)?;
        let players = self
            .group_queries
            .find_players_by_group(&payload.group_id)
            .await?;

        let text = format!("A match was scheduled at '{}'", payload.location);
        for player_id in players {
            if player_id == payload.created_by {
                continue;
            }
            notify_once(
                &*self.messages,
                &player_id,
                payload.group_id,
                text.clone(),
                &event,
            )
            .await?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MatchNotifier"
    }
}
