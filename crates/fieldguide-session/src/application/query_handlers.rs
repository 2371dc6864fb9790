//! Query handlers for the Hotspot Session context.
//!
//! Read-only view DTOs for the presentation surface and for hosts.

use fieldguide_content::domain::subject::Subject;
use fieldguide_core::aggregate::AggregateRoot;
use fieldguide_core::error::DomainError;
use fieldguide_core::event::{DomainEvent, EventMetadata};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{HotspotSession, SessionState};
use crate::domain::events::SessionEvent;

/// Read-only view of a subject as the surface renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectView {
    /// Subject key.
    pub key: String,
    /// Short label.
    pub display_name: String,
    /// One-line description.
    pub summary: String,
    /// Narrative text.
    pub detail: String,
    /// Symbolic glyph name.
    pub icon: String,
}

impl From<&Subject> for SubjectView {
    fn from(subject: &Subject) -> Self {
        Self {
            key: subject.key.clone(),
            display_name: subject.display_name.clone(),
            summary: subject.summary.clone(),
            detail: subject.detail.clone(),
            icon: subject.icon.clone(),
        }
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Idle or presenting.
    pub state: SessionState,
    /// The selected key, possibly left over from a dismissed presentation.
    pub selected_key: Option<String>,
    /// Whether the surface is open.
    pub presenting: bool,
    /// Number of transitions so far.
    pub version: i64,
    /// Hash of the catalog the session resolves against.
    pub catalog_version: String,
}

/// A hotspot projected onto a concrete surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotPlacement {
    /// Subject key.
    pub key: String,
    /// Label for the marker.
    pub display_name: String,
    /// Glyph for the marker.
    pub icon: String,
    /// Horizontal offset in surface points.
    pub x: f64,
    /// Vertical offset in surface points.
    pub y: f64,
}

/// A produced event as a host sees it: metadata plus JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventView {
    /// Envelope fields.
    #[serde(flatten)]
    pub metadata: EventMetadata,
    /// The event-specific body.
    pub payload: serde_json::Value,
}

/// Returns the views of `events` in production order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a payload cannot be serialized.
pub fn get_event_views(events: &[SessionEvent]) -> Result<Vec<EventView>, DomainError> {
    events
        .iter()
        .map(|event| {
            Ok(EventView {
                metadata: event.metadata().clone(),
                payload: event.to_payload()?,
            })
        })
        .collect()
}

/// Returns the session view.
#[must_use]
pub fn get_session_view(session: &HotspotSession) -> SessionView {
    SessionView {
        session_id: session.id,
        state: session.state(),
        selected_key: session.selected_key().map(str::to_owned),
        presenting: session.is_presenting(),
        version: session.version(),
        catalog_version: session.catalog().version_hash().to_owned(),
    }
}

/// Returns what the presentation surface should render, if anything.
#[must_use]
pub fn get_current_subject(session: &HotspotSession) -> Option<SubjectView> {
    session.current_subject().map(SubjectView::from)
}

/// Projects the scene's hotspots onto a `width` x `height` surface.
///
/// # Errors
///
/// Returns `DomainError::Validation` if either dimension is negative or
/// non-finite.
pub fn get_hotspot_layout(
    session: &HotspotSession,
    width: f64,
    height: f64,
) -> Result<Vec<HotspotPlacement>, DomainError> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(DomainError::Validation(format!(
            "invalid surface size {width}x{height}"
        )));
    }

    Ok(session
        .scene()
        .hotspots()
        .iter()
        .filter_map(|hotspot| {
            let subject = session.catalog().get(&hotspot.key)?;
            let (x, y) = hotspot.position.project(width, height);
            Some(HotspotPlacement {
                key: hotspot.key.clone(),
                display_name: subject.display_name.clone(),
                icon: subject.icon.clone(),
                x,
                y,
            })
        })
        .collect())
}
