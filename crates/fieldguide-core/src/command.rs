//! Command abstractions.

use uuid::Uuid;

/// A discrete user or scene-provider request handled by a session.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it produces.
    fn correlation_id(&self) -> Uuid;
}
