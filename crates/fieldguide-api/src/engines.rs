//! Server-side engine ports.
//!
//! The server has no speaker or actuator. These engines log each call; the
//! device shell replays the `effects` returned with every command response.

use fieldguide_core::engine::{HapticEngine, HapticIntensity, SpeechEngine, SpeechParams};
use tracing::info;

/// Logs haptic pulses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHapticEngine;

impl HapticEngine for TracingHapticEngine {
    fn pulse(&self, intensity: HapticIntensity) {
        info!(%intensity, "haptic pulse");
    }
}

/// Logs speech requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSpeechEngine;

impl SpeechEngine for TracingSpeechEngine {
    fn speak(&self, text: &str, params: SpeechParams) {
        info!(chars = text.len(), rate = params.rate, pitch = params.pitch, "speak");
    }

    fn stop(&self) {
        info!("stop speech");
    }
}
