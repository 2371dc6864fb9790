//! Fieldguide Core — shared domain abstractions.
//!
//! This crate defines the traits and types that the catalog and session
//! contexts depend on, including the ports for the haptic and speech
//! engines. It contains no infrastructure code.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod engine;
pub mod error;
pub mod event;
