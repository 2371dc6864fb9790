//! Routes for the Hotspot Session context.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fieldguide_session::application::command_handlers::SessionCommandResult;
use fieldguide_session::application::query_handlers::{
    EventView, HotspotPlacement, SessionView, SubjectView, get_current_subject, get_event_views,
    get_hotspot_layout, get_session_view,
};
use fieldguide_session::domain::effects::Effect;
use fieldguide_session::domain::scene::{Hotspot, NormalizedPosition, Scene};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// A hotspot in a mount request.
#[derive(Debug, Deserialize)]
pub struct HotspotRequest {
    /// Subject key.
    pub key: String,
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
}

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct MountSessionRequest {
    /// The scene's hotspots. Empty for a placeholder view.
    #[serde(default)]
    pub hotspots: Vec<HotspotRequest>,
}

/// Request body for POST /{session_id}/activate.
#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    /// The tapped hotspot's key.
    pub key: String,
}

/// Request body for POST /{session_id}/tap.
#[derive(Debug, Deserialize)]
pub struct TapRequest {
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
}

/// Query string for GET /{session_id}/layout.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Surface width in points.
    pub width: f64,
    /// Surface height in points.
    pub height: f64,
}

/// Response body returned after a command is handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// Events produced, in order. Empty for a no-op.
    pub events: Vec<EventView>,
    /// Effects for the device shell to perform, in order.
    pub effects: Vec<Effect>,
    /// The session after the command.
    pub session: SessionView,
}

fn command_response(
    result: Option<SessionCommandResult>,
    session: SessionView,
) -> Result<CommandResponse, ApiError> {
    let (events, effects) = match result {
        Some(result) => (get_event_views(&result.events)?, result.effects),
        None => (Vec::new(), Vec::new()),
    };
    Ok(CommandResponse {
        events,
        effects,
        session,
    })
}

/// POST /
#[instrument(skip(state, request), fields(hotspots = request.hotspots.len()))]
async fn mount_session(
    State(state): State<AppState>,
    Json(request): Json<MountSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let hotspots = request
        .hotspots
        .into_iter()
        .map(|h| -> Result<Hotspot, ApiError> {
            Ok(Hotspot {
                position: NormalizedPosition::new(h.x, h.y)?,
                key: h.key,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let scene = Scene::new(hotspots, &state.catalog)?;

    let view = state.mount_session(scene)?;
    info!(session_id = %view.session_id, "session mounted");

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /{session_id}
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let view = state.with_session(session_id, |runtime| get_session_view(runtime.session()))?;
    Ok(Json(view))
}

/// DELETE /{session_id}
#[instrument(skip(state))]
async fn unmount_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.unmount_session(session_id) {
        info!("session unmounted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(session_id))
    }
}

/// GET /{session_id}/current
async fn get_current(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Option<SubjectView>>, ApiError> {
    let current =
        state.with_session(session_id, |runtime| get_current_subject(runtime.session()))?;
    Ok(Json(current))
}

/// GET /{session_id}/layout
async fn get_layout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<Vec<HotspotPlacement>>, ApiError> {
    let layout = state.with_session(session_id, |runtime| {
        get_hotspot_layout(runtime.session(), query.width, query.height)
    })??;
    Ok(Json(layout))
}

/// POST /{session_id}/activate
#[instrument(skip(state, request), fields(key = %request.key))]
async fn activate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ActivateRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.with_session(session_id, |runtime| {
        let result = runtime.activate(&request.key)?;
        command_response(Some(result), get_session_view(runtime.session()))
    })??;
    Ok(Json(response))
}

/// POST /{session_id}/tap
#[instrument(skip(state, request), fields(x = request.x, y = request.y))]
async fn tap(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TapRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let position = NormalizedPosition::new(request.x, request.y)?;
    let response = state.with_session(session_id, |runtime| {
        let result = runtime.tap(position)?;
        command_response(result, get_session_view(runtime.session()))
    })??;
    Ok(Json(response))
}

/// POST /{session_id}/dismiss
#[instrument(skip(state))]
async fn dismiss(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.with_session(session_id, |runtime| {
        let result = runtime.dismiss();
        command_response(Some(result), get_session_view(runtime.session()))
    })??;
    Ok(Json(response))
}

/// POST /{session_id}/narrate
#[instrument(skip(state))]
async fn narrate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let response = state.with_session(session_id, |runtime| {
        let result = runtime.narrate();
        command_response(Some(result), get_session_view(runtime.session()))
    })??;
    Ok(Json(response))
}

/// Returns the router for sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(mount_session))
        .route("/{session_id}", get(get_session).delete(unmount_session))
        .route("/{session_id}/current", get(get_current))
        .route("/{session_id}/layout", get(get_layout))
        .route("/{session_id}/activate", post(activate))
        .route("/{session_id}/tap", post(tap))
        .route("/{session_id}/dismiss", post(dismiss))
        .route("/{session_id}/narrate", post(narrate))
}
