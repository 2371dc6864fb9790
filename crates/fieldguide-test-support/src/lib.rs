//! Shared test doubles and fixtures for the Fieldguide presentation engine.

mod catalog;
mod clock;
mod engine;

pub use catalog::cell_catalog;
pub use clock::FixedClock;
pub use engine::{RecordingHapticEngine, RecordingSpeechEngine, SpeechCall};
