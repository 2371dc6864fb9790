//! Recording engines — `HapticEngine` and `SpeechEngine` doubles that
//! remember every call.

use std::sync::Mutex;

use fieldguide_core::engine::{HapticEngine, HapticIntensity, SpeechEngine, SpeechParams};

/// A haptic engine that records every pulse.
#[derive(Debug, Default)]
pub struct RecordingHapticEngine {
    pulses: Mutex<Vec<HapticIntensity>>,
}

impl RecordingHapticEngine {
    /// Creates an engine with no recorded pulses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded pulses.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn pulses(&self) -> Vec<HapticIntensity> {
        self.pulses.lock().unwrap().clone()
    }
}

impl HapticEngine for RecordingHapticEngine {
    fn pulse(&self, intensity: HapticIntensity) {
        self.pulses.lock().unwrap().push(intensity);
    }
}

/// A call received by [`RecordingSpeechEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCall {
    /// `speak(text, params)`.
    Speak {
        /// The text handed to the engine.
        text: String,
        /// The playback parameters.
        params: SpeechParams,
    },
    /// `stop()`.
    Stop,
}

/// A speech engine that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSpeechEngine {
    calls: Mutex<Vec<SpeechCall>>,
}

impl RecordingSpeechEngine {
    /// Creates an engine with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns only the texts passed to `speak`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn spoken_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { text, .. } => Some(text),
                SpeechCall::Stop => None,
            })
            .collect()
    }
}

impl SpeechEngine for RecordingSpeechEngine {
    fn speak(&self, text: &str, params: SpeechParams) {
        self.calls.lock().unwrap().push(SpeechCall::Speak {
            text: text.to_owned(),
            params,
        });
    }

    fn stop(&self) {
        self.calls.lock().unwrap().push(SpeechCall::Stop);
    }
}
