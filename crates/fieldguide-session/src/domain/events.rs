//! Domain events for the Hotspot Session context.

use fieldguide_core::error::DomainError;
use fieldguide_core::event::{DomainEvent, EventMetadata};
use serde::Serialize;
use uuid::Uuid;

/// Emitted when a hotspot key resolves and its subject is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectActivated {
    /// The session identifier.
    pub session_id: Uuid,
    /// The activated subject key.
    pub key: String,
    /// The subject that was on screen and got replaced, if any.
    pub replaced_key: Option<String>,
}

/// Emitted when the presentation surface closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationDismissed {
    /// The session identifier.
    pub session_id: Uuid,
    /// The subject that was on screen. It stays selected.
    pub key: String,
}

/// Emitted when narration of the current subject is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationRequested {
    /// The session identifier.
    pub session_id: Uuid,
    /// The narrated subject key.
    pub key: String,
}

/// Event type identifier for [`SubjectActivated`].
pub const SUBJECT_ACTIVATED_EVENT_TYPE: &str = "session.subject_activated";

/// Event type identifier for [`PresentationDismissed`].
pub const PRESENTATION_DISMISSED_EVENT_TYPE: &str = "session.presentation_dismissed";

/// Event type identifier for [`NarrationRequested`].
pub const NARRATION_REQUESTED_EVENT_TYPE: &str = "session.narration_requested";

/// Event payload variants for the Hotspot Session context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionEventKind {
    /// A subject is now presented.
    SubjectActivated(SubjectActivated),
    /// The presentation surface closed.
    PresentationDismissed(PresentationDismissed),
    /// Narration was requested.
    NarrationRequested(NarrationRequested),
}

/// Domain event envelope for the Hotspot Session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: SessionEventKind,
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            SessionEventKind::SubjectActivated(_) => SUBJECT_ACTIVATED_EVENT_TYPE,
            SessionEventKind::PresentationDismissed(_) => PRESENTATION_DISMISSED_EVENT_TYPE,
            SessionEventKind::NarrationRequested(_) => NARRATION_REQUESTED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(&self.kind).map_err(|e| {
            DomainError::Infrastructure(format!(
                "cannot serialize {} payload: {e}",
                self.event_type()
            ))
        })
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
