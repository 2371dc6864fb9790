//! Routes for the Content Catalog.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use fieldguide_session::application::query_handlers::SubjectView;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
async fn list_subjects(State(state): State<AppState>) -> Json<Vec<SubjectView>> {
    Json(state.catalog.iter().map(SubjectView::from).collect())
}

/// GET /{key}
async fn get_subject(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SubjectView>, ApiError> {
    let subject = state.catalog.lookup(&key)?;
    Ok(Json(SubjectView::from(subject)))
}

/// Returns the router for the catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_subjects))
        .route("/{key}", get(get_subject))
}
