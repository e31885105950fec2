//! CreateMatchHandler - Command handler for scheduling a match.

use std::sync::Arc;

use crate::domain::foundation::{AggregateRoot, CommandMetadata, GroupId, MatchId, Timestamp, UserId};
use crate::domain::game::{Location, Match, MatchError};
use crate::ports::{EventPublisher, GroupQueries, MatchRepository};

use super::stamped;

/// Command to schedule a match for a group.
#[derive(Debug, Clone)]
pub struct CreateMatchCommand {
    pub group_id: GroupId,
    pub created_by: UserId,
    pub location: String,
    pub scheduled_at: Timestamp,
    pub max_players: u32,
}

/// Result of a scheduled match.
#[derive(Debug, Clone)]
pub struct CreateMatchResult {
    pub game: Match,
}

/// Handler for scheduling matches.
///
/// Scheduling requires Admin or Master in the owning group, answered by
/// the Group module through the cross-module query port. The result may
/// be stale and a failed lookup denies.
pub struct CreateMatchHandler {
    matches: Arc<dyn MatchRepository>,
    group_queries: Arc<dyn GroupQueries>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateMatchHandler {
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
        cmd: CreateMatchCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateMatchResult, MatchError> {
        // 1. Cross-module authorization; lookup failure denies
        let is_admin = self
            .group_queries
            .has_player_admin_role(&cmd.created_by, &cmd.group_id)
            .await
            .unwrap_or(false);
        if !is_admin {
            return Err(MatchError::NotGroupAdmin(cmd.created_by));
        }

        // 2. Validate inputs and create the aggregate
        let location = Location::new(cmd.location)?;
        let mut game = Match::schedule(
            MatchId::new(),
            cmd.group_id,
            location,
            cmd.scheduled_at,
            cmd.max_players,
            cmd.created_by,
        )?;

        // 3. Persist, then publish
        self.matches.save(&game).await?;

        let events = stamped(game.take_events(), &metadata);
        self.event_publisher.publish_all(events).await?;

        Ok(CreateMatchResult { game })
    }
}
