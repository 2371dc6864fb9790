//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for in-memory aggregates whose transitions are recorded as events.
///
/// Events are never persisted. They are drained after each command so the
/// application layer can derive side effects and notify listeners.
pub trait AggregateRoot: Send {
    /// The event type this aggregate records.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the number of events applied so far.
    fn version(&self) -> i64;

    /// Applies an event to the aggregate state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events recorded since the last drain.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Removes and returns the events recorded since the last drain.
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}
