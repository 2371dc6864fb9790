//! Transition listeners.
//!
//! A presentation surface subscribes to learn when to re-read
//! `current_subject()`. Listeners run after every transition, never on a
//! no-op.

use std::fmt;

use crate::domain::aggregates::HotspotSession;
use crate::domain::events::SessionEvent;

/// Callback invoked after a session transition.
pub trait SessionListener: Send {
    /// Called with the produced event and the session after the transition.
    fn on_transition(&self, event: &SessionEvent, session: &HotspotSession);
}

impl<F> SessionListener for F
where
    F: Fn(&SessionEvent, &HotspotSession) + Send,
{
    fn on_transition(&self, event: &SessionEvent, session: &HotspotSession) {
        self(event, session);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered set of listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn SessionListener>)>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it runs after those registered before it.
    pub fn subscribe(&mut self, listener: impl SessionListener + 'static) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Invokes every listener once per event.
    pub fn notify(&self, events: &[SessionEvent], session: &HotspotSession) {
        for event in events {
            for (_, listener) in &self.listeners {
                listener.on_transition(event, session);
            }
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
