//! Ports for the external feedback engines.
//!
//! Both engines are fire-and-forget: calls return `()`, the core never waits
//! on them, and their outcome cannot fail a session transition.

use std::fmt;

use serde::Serialize;

use crate::error::DomainError;

/// Strength of a haptic pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticIntensity {
    /// Subtle tick, used for discovery actions.
    #[default]
    Light,
    /// Standard confirmation.
    Medium,
    /// Strong emphasis.
    Heavy,
}

impl fmt::Display for HapticIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        };
        f.write_str(name)
    }
}

/// Playback parameters handed to the speech engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeechParams {
    /// Speaking rate in `[0.0, 1.0]`; `0.5` is the engine's natural pace.
    pub rate: f32,
    /// Pitch multiplier in `[0.5, 2.0]`.
    pub pitch: f32,
}

impl SpeechParams {
    /// Lowest accepted rate.
    pub const MIN_RATE: f32 = 0.0;
    /// Highest accepted rate.
    pub const MAX_RATE: f32 = 1.0;
    /// Lowest accepted pitch.
    pub const MIN_PITCH: f32 = 0.5;
    /// Highest accepted pitch.
    pub const MAX_PITCH: f32 = 2.0;

    /// Creates validated speech parameters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either value is non-finite or
    /// outside its accepted range.
    pub fn new(rate: f32, pitch: f32) -> Result<Self, DomainError> {
        if !rate.is_finite() || !(Self::MIN_RATE..=Self::MAX_RATE).contains(&rate) {
            return Err(DomainError::Validation(format!(
                "speech rate {rate} outside [{}, {}]",
                Self::MIN_RATE,
                Self::MAX_RATE
            )));
        }
        if !pitch.is_finite() || !(Self::MIN_PITCH..=Self::MAX_PITCH).contains(&pitch) {
            return Err(DomainError::Validation(format!(
                "speech pitch {pitch} outside [{}, {}]",
                Self::MIN_PITCH,
                Self::MAX_PITCH
            )));
        }
        Ok(Self { rate, pitch })
    }
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 0.5,
            pitch: 1.0,
        }
    }
}

/// One-shot haptic feedback generator.
pub trait HapticEngine: Send + Sync {
    /// Fires a single pulse.
    fn pulse(&self, intensity: HapticIntensity);
}

/// Text-to-speech engine.
pub trait SpeechEngine: Send + Sync {
    /// Starts speaking `text`.
    fn speak(&self, text: &str, params: SpeechParams);

    /// Stops any in-flight utterance. Safe to call when nothing is playing.
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haptic_intensity_displays_lowercase_name() {
        assert_eq!(HapticIntensity::Light.to_string(), "light");
        assert_eq!(HapticIntensity::Heavy.to_string(), "heavy");
    }

    #[test]
    fn test_speech_params_default_is_natural_pace() {
        let params = SpeechParams::default();
        assert!((params.rate - 0.5).abs() < f32::EPSILON);
        assert!((params.pitch - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_speech_params_rejects_out_of_range_values() {
        assert!(SpeechParams::new(1.5, 1.0).is_err());
        assert!(SpeechParams::new(0.5, 0.1).is_err());
        assert!(SpeechParams::new(f32::NAN, 1.0).is_err());
        assert!(SpeechParams::new(0.4, 1.2).is_ok());
    }
}
