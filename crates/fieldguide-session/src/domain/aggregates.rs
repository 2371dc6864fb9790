//! Aggregate roots for the Hotspot Session context.

use std::sync::Arc;

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_content::domain::subject::Subject;
use fieldguide_core::aggregate::AggregateRoot;
use fieldguide_core::clock::Clock;
use fieldguide_core::error::DomainError;
use fieldguide_core::event::{DomainEvent, EventMetadata};
use serde::Serialize;
use uuid::Uuid;

use super::events::{
    NarrationRequested, PresentationDismissed, SessionEvent, SessionEventKind, SubjectActivated,
};
use super::scene::Scene;

/// Whether the presentation surface is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Surface closed.
    Idle,
    /// Surface open on the selected subject.
    Presenting,
}

/// The aggregate root for one mounted scene view.
///
/// `presenting` implies `selected_key` is set and resolves in the catalog.
/// `selected_key` survives a dismiss.
#[derive(Debug)]
pub struct HotspotSession {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    catalog: Arc<Catalog>,
    scene: Scene,
    selected_key: Option<String>,
    presenting: bool,
    /// Events recorded since the last drain.
    uncommitted_events: Vec<SessionEvent>,
}

impl HotspotSession {
    /// Creates an idle session over `scene`, resolving against `catalog`.
    #[must_use]
    pub fn new(id: Uuid, catalog: Arc<Catalog>, scene: Scene) -> Self {
        Self {
            id,
            version: 0,
            catalog,
            scene,
            selected_key: None,
            presenting: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// Presents the subject for `key`, producing a `SubjectActivated` event.
    ///
    /// Valid from any state; an open subject is replaced directly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SubjectNotFound` if `key` is not in the catalog.
    /// The session is left untouched in that case.
    pub fn activate(
        &mut self,
        key: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.catalog.lookup(key)?;

        let replaced_key = if self.presenting {
            self.selected_key.clone()
        } else {
            None
        };
        self.record(
            SessionEventKind::SubjectActivated(SubjectActivated {
                session_id: self.id,
                key: key.to_owned(),
                replaced_key,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Closes the presentation surface, producing a `PresentationDismissed`
    /// event. Returns `false` without recording anything when already idle.
    pub fn dismiss(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        let (true, Some(key)) = (self.presenting, self.selected_key.clone()) else {
            return false;
        };
        self.record(
            SessionEventKind::PresentationDismissed(PresentationDismissed {
                session_id: self.id,
                key,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Requests narration of the current subject, producing a
    /// `NarrationRequested` event. Returns `false` without recording
    /// anything when no subject is current.
    pub fn narrate(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        let Some(key) = self.current_subject().map(|subject| subject.key.clone()) else {
            return false;
        };
        self.record(
            SessionEventKind::NarrationRequested(NarrationRequested {
                session_id: self.id,
                key,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// The subject the presentation surface should render, if any.
    #[must_use]
    pub fn current_subject(&self) -> Option<&Subject> {
        if !self.presenting {
            return None;
        }
        self.selected_key
            .as_deref()
            .and_then(|key| self.catalog.get(key))
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.presenting {
            SessionState::Presenting
        } else {
            SessionState::Idle
        }
    }

    /// The selected key, which may outlive the presentation.
    #[must_use]
    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    /// The most recently presented key once the surface has closed.
    #[must_use]
    pub fn last_viewed_key(&self) -> Option<&str> {
        if self.presenting {
            None
        } else {
            self.selected_key()
        }
    }

    /// Whether the presentation surface is open.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    /// The catalog this session resolves against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The mounted scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn record(&mut self, kind: SessionEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let mut event = SessionEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: String::new(),
                aggregate_id: self.id,
                sequence_number: self.version + 1,
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        event.metadata.event_type = event.event_type().to_owned();

        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for HotspotSession {
    type Event = SessionEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            SessionEventKind::SubjectActivated(payload) => {
                if self.catalog.contains(&payload.key) {
                    self.selected_key = Some(payload.key.clone());
                    self.presenting = true;
                }
            }
            SessionEventKind::PresentationDismissed(_) => {
                self.presenting = false;
            }
            SessionEventKind::NarrationRequested(_) => {}
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
