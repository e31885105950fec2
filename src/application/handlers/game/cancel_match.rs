//! CancelMatchHandler - Command handler for calling off a match.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, MatchId, UserId};
use crate::domain::game::{Match, MatchError};
use crate::ports::{EventPublisher, GroupQueries, MatchRepository};

use super::stamped;

/// Command to cancel a scheduled match.
#[derive(Debug, Clone)]
pub struct CancelMatchCommand {
    pub match_id: MatchId,
    pub cancelled_by: UserId,
}

/// Result of a cancellation.
#[derive(Debug, Clone)]
pub struct CancelMatchResult {
    pub game: Match,
}

/// Handler for cancellations. Requires Admin or Master in the owning
/// group, like scheduling.
pub struct CancelMatchHandler {
    matches: Arc<dyn MatchRepository>,
    group_queries: Arc<dyn GroupQueries>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CancelMatchHandler {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        group_queries: Arc<dyn GroupQueries>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            matches,
            group_queries,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelMatchCommand,
        metadata: CommandMetadata,
    ) -> Result<CancelMatchResult, MatchError> {
        let mut game = self
            .matches
            .find_by_id(&cmd.match_id)
            .await?
            .ok_or(MatchError::NotFound(cmd.match_id))?;

        // Cross-module authorization; lookup failure denies
        let is_admin = self
            .group_queries
            .has_player_admin_role(&cmd.cancelled_by, game.group_id())
            .await
            .unwrap_or(false);
        if !is_admin {
            return Err(MatchError::NotGroupAdmin(cmd.cancelled_by));
        }

        game.cancel(cmd.cancelled_by)?;

        self.matches.update(&game).await?;

        let events = stamped(game.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(CancelMatchResult { game })
    }
}
