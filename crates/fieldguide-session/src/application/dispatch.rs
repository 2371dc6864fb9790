//! Effect dispatch onto the engine ports.

use fieldguide_core::engine::{HapticEngine, SpeechEngine};
use tracing::debug;

use crate::domain::effects::Effect;

/// Executes `effects` in order. Engines are fire-and-forget, so nothing is
/// awaited or retried.
pub fn dispatch_effects(effects: &[Effect], haptics: &dyn HapticEngine, speech: &dyn SpeechEngine) {
    for effect in effects {
        match effect {
            Effect::HapticPulse { intensity } => {
                debug!(%intensity, "haptic pulse");
                haptics.pulse(*intensity);
            }
            Effect::StopSpeech => {
                debug!("stopping speech");
                speech.stop();
            }
            Effect::Speak { text, params } => {
                debug!(chars = text.len(), rate = params.rate, pitch = params.pitch, "speaking");
                speech.speak(text, *params);
            }
        }
    }
}
