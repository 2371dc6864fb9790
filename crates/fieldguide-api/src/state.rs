//! Shared application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_core::aggregate::AggregateRoot;
use fieldguide_core::event::DomainEvent;
use fieldguide_session::application::query_handlers::{SessionView, get_session_view};
use fieldguide_session::application::runtime::{SessionPorts, SessionRuntime};
use fieldguide_session::domain::aggregates::HotspotSession;
use fieldguide_session::domain::effects::FeedbackSettings;
use fieldguide_session::domain::events::SessionEvent;
use fieldguide_session::domain::scene::Scene;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// Application state shared across all request handlers.
///
/// Every mounted session lives behind one mutex, so each transition runs to
/// completion before the next request touches any session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The catalog every session resolves against.
    pub catalog: Arc<Catalog>,
    /// Engine ports handed to new sessions.
    pub ports: SessionPorts,
    /// Feedback settings handed to new sessions.
    pub feedback: FeedbackSettings,
    max_sessions: usize,
    sessions: Arc<Mutex<HashMap<Uuid, SessionRuntime>>>,
}

impl AppState {
    /// Sessions allowed at once unless configured otherwise.
    pub const DEFAULT_MAX_SESSIONS: usize = 1024;

    /// Create new application state.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, ports: SessionPorts, feedback: FeedbackSettings) -> Self {
        Self {
            catalog,
            ports,
            feedback,
            max_sessions: Self::DEFAULT_MAX_SESSIONS,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Caps how many sessions may be mounted at once.
    #[must_use]
    pub fn with_session_limit(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Mounts a session over `scene` and returns its initial view.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionLimitReached` when the cap is reached.
    pub fn mount_session(&self, scene: Scene) -> Result<SessionView, ApiError> {
        let mut runtime = SessionRuntime::mount(
            Arc::clone(&self.catalog),
            scene,
            self.ports.clone(),
            self.feedback,
        );
        runtime.subscribe(|event: &SessionEvent, session: &HotspotSession| {
            info!(
                session_id = %session.aggregate_id(),
                event_type = event.event_type(),
                version = session.version(),
                "session transition"
            );
        });
        let view = get_session_view(runtime.session());

        let mut sessions = self.lock_sessions();
        if sessions.len() >= self.max_sessions {
            warn!(limit = self.max_sessions, "session limit reached");
            return Err(ApiError::SessionLimitReached(self.max_sessions));
        }
        sessions.insert(runtime.id(), runtime);
        Ok(view)
    }

    /// Runs `f` against a mounted session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if no session has `session_id`.
    pub fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut SessionRuntime) -> T,
    ) -> Result<T, ApiError> {
        let mut sessions = self.lock_sessions();
        let runtime = sessions
            .get_mut(&session_id)
            .ok_or(ApiError::SessionNotFound(session_id))?;
        Ok(f(runtime))
    }

    /// Unmounts a session. Returns `false` if it did not exist.
    pub fn unmount_session(&self, session_id: Uuid) -> bool {
        self.lock_sessions().remove(&session_id).is_some()
    }

    /// Number of mounted sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.lock_sessions().len()
    }

    fn lock_sessions(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SessionRuntime>> {
        // Transitions apply atomically; a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
