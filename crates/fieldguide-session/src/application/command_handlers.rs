//! Command handlers for the Hotspot Session context.
//!
//! Each handler runs one transition on the aggregate, drains the recorded
//! events, and plans the effects they imply. Nothing here touches an engine.

use fieldguide_core::aggregate::AggregateRoot;
use fieldguide_core::clock::Clock;
use fieldguide_core::command::Command;
use fieldguide_core::error::DomainError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::aggregates::HotspotSession;
use crate::domain::commands::{ActivateHotspot, DismissPresentation, NarrateSubject, TapScene};
use crate::domain::effects::{Effect, FeedbackSettings, plan_effects};
use crate::domain::events::SessionEvent;
use crate::domain::scene::Scene;

/// Result of a handled command.
#[derive(Debug)]
pub struct SessionCommandResult {
    /// The session the command ran against.
    pub session_id: Uuid,
    /// Events produced by the transition. Empty for a no-op.
    pub events: Vec<SessionEvent>,
    /// Effects to dispatch, in order.
    pub effects: Vec<Effect>,
}

impl SessionCommandResult {
    /// `true` when the command changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

fn drain(session: &mut HotspotSession, settings: &FeedbackSettings) -> SessionCommandResult {
    let events = session.take_uncommitted_events();
    let effects = events
        .iter()
        .flat_map(|event| plan_effects(event, session.catalog(), settings))
        .collect();
    SessionCommandResult {
        session_id: session.aggregate_id(),
        events,
        effects,
    }
}

/// Handles the `ActivateHotspot` command: resolves the key and presents the
/// subject.
///
/// # Errors
///
/// Returns `DomainError::SubjectNotFound` if the key does not resolve. The
/// session is unchanged.
pub fn handle_activate_hotspot(
    command: &ActivateHotspot,
    session: &mut HotspotSession,
    clock: &dyn Clock,
    settings: &FeedbackSettings,
) -> Result<SessionCommandResult, DomainError> {
    if let Err(err) = session.activate(&command.key, command.correlation_id(), clock) {
        warn!(
            session_id = %session.id,
            correlation_id = %command.correlation_id(),
            key = %command.key,
            "hotspot key did not resolve"
        );
        return Err(err);
    }

    info!(
        session_id = %session.id,
        correlation_id = %command.correlation_id(),
        command = command.command_type(),
        key = %command.key,
        "subject activated"
    );
    Ok(drain(session, settings))
}

/// Handles the `TapScene` command: hit-tests the tap against the scene and
/// activates the nearest hotspot.
///
/// Returns `Ok(None)` when the tap misses every hotspot.
///
/// # Errors
///
/// Returns `DomainError::SubjectNotFound` if the hit hotspot does not
/// resolve, which a validated scene rules out.
pub fn handle_tap_scene(
    command: &TapScene,
    session: &mut HotspotSession,
    clock: &dyn Clock,
    settings: &FeedbackSettings,
) -> Result<Option<SessionCommandResult>, DomainError> {
    let Some(key) = session
        .scene()
        .hotspot_at(&command.position, Scene::DEFAULT_HIT_TOLERANCE)
        .map(|hotspot| hotspot.key.clone())
    else {
        debug!(
            session_id = %session.id,
            x = command.position.x(),
            y = command.position.y(),
            "tap missed every hotspot"
        );
        return Ok(None);
    };

    let activate = ActivateHotspot {
        correlation_id: command.correlation_id(),
        key,
    };
    handle_activate_hotspot(&activate, session, clock, settings).map(Some)
}

/// Handles the `DismissPresentation` command. A no-op when already idle.
pub fn handle_dismiss_presentation(
    command: &DismissPresentation,
    session: &mut HotspotSession,
    clock: &dyn Clock,
    settings: &FeedbackSettings,
) -> SessionCommandResult {
    if session.dismiss(command.correlation_id(), clock) {
        info!(
            session_id = %session.id,
            correlation_id = %command.correlation_id(),
            "presentation dismissed"
        );
    } else {
        debug!(session_id = %session.id, "dismiss ignored: surface already closed");
    }
    drain(session, settings)
}

/// Handles the `NarrateSubject` command. A no-op when no subject is current.
pub fn handle_narrate_subject(
    command: &NarrateSubject,
    session: &mut HotspotSession,
    clock: &dyn Clock,
    settings: &FeedbackSettings,
) -> SessionCommandResult {
    if session.narrate(command.correlation_id(), clock) {
        info!(
            session_id = %session.id,
            correlation_id = %command.correlation_id(),
            "narration requested"
        );
    } else {
        debug!(session_id = %session.id, "narrate ignored: no current subject");
    }
    drain(session, settings)
}
