//! RosterProjection - Event handler maintaining the Player module's
//! roster records.
//!
//! Listens to Group events and mirrors each (user, group) membership
//! into a `PlayerRecord`, so the Player module can answer roster
//! questions without coupling to the Group aggregate. Every mutation is
//! an upsert and applying the same event twice leaves the record as
//! after the first application.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{
    AggregateRoot, DomainError, ErrorCode, EventEnvelope, GroupId, PlayerId, PlayerStatus, Role,
    UserId,
};
use crate::domain::group::{
    GroupCreated, InvitationAccepted, MasterChanged, PlayerRemoved, PlayerUpdated, UserLeft,
};
use crate::domain::player::PlayerRecord;
use crate::ports::{EventHandler, EventPublisher, PlayerRepository};

/// Group event types the roster projection subscribes to.
pub const ROSTER_EVENT_TYPES: &[&str] = &[
    "group.created",
    "group.invitation_accepted",
    "group.player_updated",
    "group.master_changed",
    "group.player_removed",
    "group.user_left",
];

/// Mirrors Group membership changes into roster records.
///
/// A transition into the Master role stages the Player module's own
/// `player.new_master_appointed` event, published through the injected
/// publisher as part of handling (nested synchronous dispatch).
pub struct RosterProjection {
    players: Arc<dyn PlayerRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RosterProjection {
    /// Creates a new RosterProjection.
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            players,
            event_publisher,
        }
    }

    /// Load-or-create a roster record and apply a mutation to it.
    ///
    /// `create_as` is the initial (role, status) when no record exists;
    /// `None` means the event has nothing to apply to a missing record
    /// and is skipped. A mutation that changes nothing (redelivery) is
    /// not persisted.
    async fn upsert(
        &self,
        user_id: &UserId,
        group_id: &GroupId,
        create_as: Option<(Role, PlayerStatus)>,
        cause: &EventEnvelope,
        mutate: impl FnOnce(&mut PlayerRecord) + Send,
    ) -> Result<(), DomainError> {
        match self
            .players
            .find_by_user_and_group(user_id, group_id)
            .await?
        {
            Some(mut record) => {
                let version_before = record.version();
                mutate(&mut record);
                if record.version() == version_before {
                    tracing::debug!(
                        user_id = %user_id,
                        group_id = %group_id,
                        event_id = %cause.event_id,
                        "roster record already up to date"
                    );
                    return Ok(());
                }
                self.players.update(&record).await?;
                self.publish_staged(&mut record, cause).await
            }
            None => match create_as {
                Some((role, status)) => {
                    let mut record = PlayerRecord::create(
                        PlayerId::new(),
                        user_id.clone(),
                        *group_id,
                        role,
                        status,
                    );
                    self.players.save(&record).await?;
                    self.publish_staged(&mut record, cause).await
                }
                None => {
                    tracing::debug!(
                        user_id = %user_id,
                        group_id = %group_id,
                        "no roster record for event, skipping"
                    );
                    Ok(())
                }
            },
        }
    }

    /// Publish events the record staged, correlated to the causing event.
    async fn publish_staged(
        &self,
        record: &mut PlayerRecord,
        cause: &EventEnvelope,
    ) -> Result<(), DomainError> {
        let events: Vec<EventEnvelope> = record
            .take_events()
            .into_iter()
            .map(|envelope| {
                let envelope = envelope.with_causation_id(cause.event_id.as_str());
                match &cause.metadata.correlation_id {
                    Some(id) => envelope.with_correlation_id(id.clone()),
                    None => envelope,
                }
            })
            .collect();
        if events.is_empty() {
            return Ok(());
        }
        self.event_publisher.publish_all(events).await
    }
}

#[async_trait]
impl EventHandler for RosterProjection {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        match event.event_type.as_str() {
            "group.created" => {
                let payload: GroupCreated = parse(&event)?;
                self.upsert(
                    &payload.creator_id,
                    &payload.group_id,
                    Some((Role::Master, PlayerStatus::Active)),
                    &event,
                    |record| record.promote_to_master(),
                )
                .await
            }
            "group.invitation_accepted" => {
                let payload: InvitationAccepted = parse(&event)?;
                self.upsert(
                    &payload.user_id,
                    &payload.group_id,
                    Some((Role::Member, PlayerStatus::Active)),
                    &event,
                    |record| record.reactivate_as_member(),
                )
                .await
            }
            "group.player_updated" => {
                let payload: PlayerUpdated = parse(&event)?;
                let (new_role, new_status) = (payload.new_role, payload.new_status);
                self.upsert(
                    &payload.user_id,
                    &payload.group_id,
                    Some((new_role, new_status)),
                    &event,
                    |record| record.sync_role_and_status(new_role, new_status),
                )
                .await
            }
            "group.master_changed" => {
                let payload: MasterChanged = parse(&event)?;
                if let Some(previous_id) = &payload.previous_master_id {
                    self.upsert(previous_id, &payload.group_id, None, &event, |record| {
                        record.demote_to_admin()
                    })
                    .await?;
                }
                self.upsert(
                    &payload.new_master_id,
                    &payload.group_id,
                    Some((Role::Master, PlayerStatus::Active)),
                    &event,
                    |record| record.promote_to_master(),
                )
                .await
            }
            "group.player_removed" => {
                let payload: PlayerRemoved = parse(&event)?;
                self.upsert(&payload.user_id, &payload.group_id, None, &event, |record| {
                    record.mark_removed()
                })
                .await
            }
            "group.user_left" => {
                let payload: UserLeft = parse(&event)?;
                self.upsert(&payload.user_id, &payload.group_id, None, &event, |record| {
                    record.mark_left()
                })
                .await
            }
            other => {
                tracing::debug!(event_type = other, "roster projection ignores event");
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "RosterProjection"
    }
}

fn parse<T: serde::de::DeserializeOwned>(event: &EventEnvelope) -> Result<T, DomainError> {
    event
        .payload_as()
        .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))
}
