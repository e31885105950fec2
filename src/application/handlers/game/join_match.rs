//! JoinMatchHandler - Command handler for registering a player.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, MatchId, UserId};
use crate::domain::game::{Match, MatchError};
use crate::ports::{EventPublisher, GroupQueries, MatchRepository};

use super::stamped;

/// Command to register a user for a match.
#[derive(Debug, Clone)]
pub struct JoinMatchCommand {
    pub match_id: MatchId,
    pub user_id: UserId,
}

/// Result of a registration.
#[derive(Debug, Clone)]
pub struct JoinMatchResult {
    pub game: Match,
}

/// Handler for match registrations.
///
/// Whether the user is still an active player of the owning group is a
/// cross-module question and may be answered stale; the Match aggregate
/// still enforces its own registration invariants (no duplicates,
/// capacity, not cancelled) locally.
pub struct JoinMatchHandler {
    matches: Arc<dyn MatchRepository>,
    group_queries: Arc<dyn GroupQueries>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl JoinMatchHandler {
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
        cmd: JoinMatchCommand,
        metadata: CommandMetadata,
    ) -> Result<JoinMatchResult, MatchError> {
        let mut game = self
            .matches
            .find_by_id(&cmd.match_id)
            .await?
            .ok_or(MatchError::NotFound(cmd.match_id))?;

        // Cross-module check; lookup failure denies
        let is_active = self
            .group_queries
            .is_player_active(&cmd.user_id, game.group_id())
            .await
            .unwrap_or(false);
        if !is_active {
            return Err(MatchError::PlayerNotActiveInGroup(cmd.user_id));
        }

        game.register_player(cmd.user_id)?;

        self.matches.update(&game).await?;

        let events = stamped(game.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(JoinMatchResult { game })
    }
}
