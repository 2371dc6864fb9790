//! Side effects derived from session events.
//!
//! Planning is pure: it turns an event into the engine calls it implies.
//! Executing those calls is the dispatcher's job.

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_core::engine::{HapticIntensity, SpeechParams};
use serde::Serialize;

use super::events::{SessionEvent, SessionEventKind};

/// A fire-and-forget call on an external engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// `HapticEngine::pulse`.
    HapticPulse {
        /// Pulse strength.
        intensity: HapticIntensity,
    },
    /// `SpeechEngine::stop`.
    StopSpeech,
    /// `SpeechEngine::speak`.
    Speak {
        /// Text to speak, verbatim.
        text: String,
        /// Playback parameters.
        #[serde(flatten)]
        params: SpeechParams,
    },
}

/// Pulse fired on every successful activation.
pub const ACTIVATION_PULSE: HapticIntensity = HapticIntensity::Light;

/// Fixed feedback configuration for a session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FeedbackSettings {
    /// Playback parameters for every narration.
    pub speech: SpeechParams,
}

/// Returns the effects implied by `event`.
///
/// Narration always stops any in-flight utterance before speaking.
#[must_use]
pub fn plan_effects(
    event: &SessionEvent,
    catalog: &Catalog,
    settings: &FeedbackSettings,
) -> Vec<Effect> {
    match &event.kind {
        SessionEventKind::SubjectActivated(_) => vec![Effect::HapticPulse {
            intensity: ACTIVATION_PULSE,
        }],
        SessionEventKind::PresentationDismissed(_) => Vec::new(),
        SessionEventKind::NarrationRequested(payload) => catalog
            .get(&payload.key)
            .map(|subject| {
                vec![
                    Effect::StopSpeech,
                    Effect::Speak {
                        text: subject.detail.clone(),
                        params: settings.speech,
                    },
                ]
            })
            .unwrap_or_default(),
    }
}
