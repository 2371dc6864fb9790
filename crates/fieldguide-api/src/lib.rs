//! Fieldguide HTTP host.
//!
//! Exposes the content catalog and per-view hotspot sessions so a device
//! shell can drive the state machine remotely.

pub mod config;
pub mod engines;
pub mod error;
pub mod routes;
pub mod state;
