//! Domain layer for the Hotspot Session context.

pub mod aggregates;
pub mod commands;
pub mod effects;
pub mod events;
pub mod scene;
