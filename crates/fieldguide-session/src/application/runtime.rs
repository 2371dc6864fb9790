//! Session runtime: the per-view object a host drives.
//!
//! Wraps a `HotspotSession` with its ports, runs the command handlers, then
//! notifies listeners and dispatches the planned effects. Every call runs to
//! completion before returning.

use std::sync::Arc;

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_content::domain::subject::Subject;
use fieldguide_core::clock::Clock;
use fieldguide_core::engine::{HapticEngine, SpeechEngine};
use fieldguide_core::error::DomainError;
use uuid::Uuid;

use super::command_handlers::{
    SessionCommandResult, handle_activate_hotspot, handle_dismiss_presentation,
    handle_narrate_subject, handle_tap_scene,
};
use super::dispatch::dispatch_effects;
use super::listeners::{ListenerId, ListenerRegistry, SessionListener};
use crate::domain::aggregates::HotspotSession;
use crate::domain::commands::{ActivateHotspot, DismissPresentation, NarrateSubject, TapScene};
use crate::domain::effects::FeedbackSettings;
use crate::domain::scene::{NormalizedPosition, Scene};

/// External collaborators a session talks to.
#[derive(Clone)]
pub struct SessionPorts {
    /// Timestamp source for events.
    pub clock: Arc<dyn Clock>,
    /// Haptic feedback.
    pub haptics: Arc<dyn HapticEngine>,
    /// Narration.
    pub speech: Arc<dyn SpeechEngine>,
}

impl std::fmt::Debug for SessionPorts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPorts").finish_non_exhaustive()
    }
}

/// A mounted view's session plus everything needed to run it.
#[derive(Debug)]
pub struct SessionRuntime {
    session: HotspotSession,
    ports: SessionPorts,
    settings: FeedbackSettings,
    listeners: ListenerRegistry,
}

impl SessionRuntime {
    /// Mounts a new idle session over `scene`.
    #[must_use]
    pub fn mount(
        catalog: Arc<Catalog>,
        scene: Scene,
        ports: SessionPorts,
        settings: FeedbackSettings,
    ) -> Self {
        Self {
            session: HotspotSession::new(Uuid::new_v4(), catalog, scene),
            ports,
            settings,
            listeners: ListenerRegistry::new(),
        }
    }

    /// The session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.session.id
    }

    /// Read access to the underlying session.
    #[must_use]
    pub fn session(&self) -> &HotspotSession {
        &self.session
    }

    /// The subject the presentation surface should render, if any.
    #[must_use]
    pub fn current_subject(&self) -> Option<&Subject> {
        self.session.current_subject()
    }

    /// Registers a listener run after every transition.
    pub fn subscribe(&mut self, listener: impl SessionListener + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Presents the subject behind `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SubjectNotFound` if `key` is not in the catalog.
    /// No listener runs and no effect is dispatched in that case.
    pub fn activate(&mut self, key: &str) -> Result<SessionCommandResult, DomainError> {
        let command = ActivateHotspot {
            correlation_id: Uuid::new_v4(),
            key: key.to_owned(),
        };
        let result = handle_activate_hotspot(
            &command,
            &mut self.session,
            self.ports.clock.as_ref(),
            &self.settings,
        )?;
        self.complete(&result);
        Ok(result)
    }

    /// Hit-tests a tap and activates the hotspot under it.
    ///
    /// Returns `Ok(None)` when the tap misses.
    ///
    /// # Errors
    ///
    /// Propagates `DomainError::SubjectNotFound` from activation.
    pub fn tap(
        &mut self,
        position: NormalizedPosition,
    ) -> Result<Option<SessionCommandResult>, DomainError> {
        let command = TapScene {
            correlation_id: Uuid::new_v4(),
            position,
        };
        let result = handle_tap_scene(
            &command,
            &mut self.session,
            self.ports.clock.as_ref(),
            &self.settings,
        )?;
        if let Some(result) = &result {
            self.complete(result);
        }
        Ok(result)
    }

    /// Closes the presentation surface. A no-op when already idle.
    pub fn dismiss(&mut self) -> SessionCommandResult {
        let command = DismissPresentation {
            correlation_id: Uuid::new_v4(),
        };
        let result = handle_dismiss_presentation(
            &command,
            &mut self.session,
            self.ports.clock.as_ref(),
            &self.settings,
        );
        self.complete(&result);
        result
    }

    /// Narrates the current subject. A no-op when nothing is presented.
    pub fn narrate(&mut self) -> SessionCommandResult {
        let command = NarrateSubject {
            correlation_id: Uuid::new_v4(),
        };
        let result = handle_narrate_subject(
            &command,
            &mut self.session,
            self.ports.clock.as_ref(),
            &self.settings,
        );
        self.complete(&result);
        result
    }

    fn complete(&self, result: &SessionCommandResult) {
        self.listeners.notify(&result.events, &self.session);
        dispatch_effects(
            &result.effects,
            self.ports.haptics.as_ref(),
            self.ports.speech.as_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use fieldguide_core::engine::{HapticIntensity, SpeechParams};
    use fieldguide_core::error::DomainError;
    use fieldguide_core::event::DomainEvent;
    use fieldguide_test_support::{
        FixedClock, RecordingHapticEngine, RecordingSpeechEngine, SpeechCall, cell_catalog,
    };

    use super::{SessionPorts, SessionRuntime};
    use crate::domain::aggregates::{HotspotSession, SessionState};
    use crate::domain::effects::FeedbackSettings;
    use crate::domain::events::SessionEvent;
    use crate::domain::scene::{Hotspot, NormalizedPosition, Scene};

    struct Harness {
        runtime: SessionRuntime,
        haptics: Arc<RecordingHapticEngine>,
        speech: Arc<RecordingSpeechEngine>,
    }

    fn harness() -> Harness {
        let catalog = cell_catalog();
        let scene = Scene::new(
            vec![
                Hotspot {
                    key: "nucleus".to_owned(),
                    position: NormalizedPosition::new(0.5, 0.5).unwrap(),
                },
                Hotspot {
                    key: "mitochondria".to_owned(),
                    position: NormalizedPosition::new(0.8, 0.3).unwrap(),
                },
            ],
            &catalog,
        )
        .unwrap();
        let haptics = Arc::new(RecordingHapticEngine::new());
        let speech = Arc::new(RecordingSpeechEngine::new());
        let ports = SessionPorts {
            clock: Arc::new(FixedClock::default()),
            haptics: haptics.clone(),
            speech: speech.clone(),
        };
        Harness {
            runtime: SessionRuntime::mount(
                Arc::new(catalog),
                scene,
                ports,
                FeedbackSettings::default(),
            ),
            haptics,
            speech,
        }
    }

    #[test]
    fn test_cell_tour_scenario() {
        // Arrange
        let mut h = harness();
        assert_eq!(h.runtime.session().state(), SessionState::Idle);

        // Act + Assert: activate
        h.runtime.activate("nucleus").unwrap();
        assert_eq!(
            h.runtime.current_subject().map(|s| s.display_name.as_str()),
            Some("Nucleus")
        );
        assert_eq!(h.haptics.pulses(), vec![HapticIntensity::Light]);

        // narrate
        h.runtime.narrate();
        assert_eq!(h.speech.spoken_texts(), vec!["Nucleus detail text".to_owned()]);

        // dismiss
        h.runtime.dismiss();
        assert_eq!(h.runtime.current_subject(), None);

        // bogus activation
        let err = h.runtime.activate("bogus").unwrap_err();
        assert_eq!(err, DomainError::SubjectNotFound("bogus".to_owned()));
        assert!(!h.runtime.session().is_presenting());
        assert_eq!(h.haptics.pulses().len(), 1);
    }

    #[test]
    fn test_activate_then_current_subject_for_every_catalog_key() {
        let mut h = harness();
        let keys: Vec<String> = h
            .runtime
            .session()
            .catalog()
            .iter()
            .map(|s| s.key.clone())
            .collect();

        for key in keys {
            h.runtime.activate(&key).unwrap();
            assert_eq!(
                h.runtime.current_subject().map(|s| s.key.clone()),
                Some(key)
            );
        }
    }

    #[test]
    fn test_reactivation_replaces_without_intermediate_close() {
        // Arrange
        let mut h = harness();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        h.runtime
            .subscribe(move |event: &SessionEvent, _: &HotspotSession| {
                sink.lock().unwrap().push(event.event_type());
            });

        // Act
        h.runtime.activate("nucleus").unwrap();
        h.runtime.activate("mitochondria").unwrap();

        // Assert
        assert_eq!(
            h.runtime.current_subject().map(|s| s.key.as_str()),
            Some("mitochondria")
        );
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["session.subject_activated", "session.subject_activated"]
        );
        assert_eq!(h.haptics.pulses().len(), 2);
    }

    #[test]
    fn test_narrate_on_fresh_session_does_not_touch_speech_engine() {
        let mut h = harness();

        let result = h.runtime.narrate();

        assert!(result.is_noop());
        assert!(h.speech.calls().is_empty());
    }

    #[test]
    fn test_repeated_narration_stops_before_each_speak() {
        let mut h = harness();
        h.runtime.activate("mitochondria").unwrap();

        h.runtime.narrate();
        h.runtime.narrate();

        let speak = SpeechCall::Speak {
            text: "Mitochondria detail text".to_owned(),
            params: SpeechParams::default(),
        };
        assert_eq!(
            h.speech.calls(),
            vec![SpeechCall::Stop, speak.clone(), SpeechCall::Stop, speak]
        );
    }

    #[test]
    fn test_listener_sees_post_transition_state_and_skips_noops() {
        // Arrange
        let mut h = harness();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        h.runtime
            .subscribe(move |_: &SessionEvent, session: &HotspotSession| {
                sink.lock()
                    .unwrap()
                    .push(session.current_subject().map(|s| s.key.clone()));
            });

        // Act
        h.runtime.dismiss();
        h.runtime.activate("nucleus").unwrap();
        h.runtime.dismiss();
        h.runtime.dismiss();
        let _ = h.runtime.activate("bogus");

        // Assert
        assert_eq!(*seen.lock().unwrap(), vec![Some("nucleus".to_owned()), None]);
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let mut h = harness();
        let calls = Arc::new(Mutex::new(0_u32));
        let sink = calls.clone();
        let id = h
            .runtime
            .subscribe(move |_: &SessionEvent, _: &HotspotSession| {
                *sink.lock().unwrap() += 1;
            });

        assert!(h.runtime.unsubscribe(id));
        assert!(!h.runtime.unsubscribe(id));
        h.runtime.activate("nucleus").unwrap();

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_tap_hits_hotspot_and_miss_is_noop() {
        let mut h = harness();

        let miss = h.runtime.tap(NormalizedPosition::new(0.05, 0.95).unwrap()).unwrap();
        let hit = h.runtime.tap(NormalizedPosition::new(0.79, 0.31).unwrap()).unwrap();

        assert!(miss.is_none());
        assert!(hit.is_some());
        assert_eq!(
            h.runtime.current_subject().map(|s| s.key.as_str()),
            Some("mitochondria")
        );
        assert_eq!(h.haptics.pulses().len(), 1);
    }
}
