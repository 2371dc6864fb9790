//! Fieldguide — Hotspot Session bounded context.
//!
//! Tracks the hotspots of the mounted scene, which subject is selected, and
//! whether the presentation surface is open. Transitions record events;
//! haptic and speech side effects are planned from those events and
//! dispatched separately.

pub mod application;
pub mod domain;
