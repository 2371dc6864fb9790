//! Route modules and router assembly.

use axum::Router;

use crate::state::AppState;

pub mod catalog;
pub mod health;
pub mod session;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/subjects", catalog::router())
        .nest("/api/v1/sessions", session::router())
        .with_state(state)
}
