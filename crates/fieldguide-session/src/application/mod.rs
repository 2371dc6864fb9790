//! Application layer for the Hotspot Session context.

pub mod command_handlers;
pub mod dispatch;
pub mod listeners;
pub mod query_handlers;
pub mod runtime;
