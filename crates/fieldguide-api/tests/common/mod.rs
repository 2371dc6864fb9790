//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fieldguide_api::routes;
use fieldguide_api::state::AppState;
use fieldguide_session::application::runtime::SessionPorts;
use fieldguide_session::domain::effects::FeedbackSettings;
use fieldguide_test_support::{
    FixedClock, RecordingHapticEngine, RecordingSpeechEngine, cell_catalog,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A router plus handles on the engines its sessions dispatch to.
pub struct TestApp {
    pub router: Router,
    pub haptics: Arc<RecordingHapticEngine>,
    pub speech: Arc<RecordingSpeechEngine>,
}

/// Build the full app router over the two-subject cell catalog with
/// recording engines. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> TestApp {
    build_test_app_with_session_limit(AppState::DEFAULT_MAX_SESSIONS)
}

/// Like `build_test_app`, with at most `limit` mounted sessions.
pub fn build_test_app_with_session_limit(limit: usize) -> TestApp {
    let haptics = Arc::new(RecordingHapticEngine::new());
    let speech = Arc::new(RecordingSpeechEngine::new());
    let ports = SessionPorts {
        clock: Arc::new(FixedClock::default()),
        haptics: haptics.clone(),
        speech: speech.clone(),
    };
    let app_state = AppState::new(Arc::new(cell_catalog()), ports, FeedbackSettings::default())
        .with_session_limit(limit);

    TestApp {
        router: routes::build_router(app_state),
        haptics,
        speech,
    }
}

/// Send a request with an optional JSON body and return status and body.
/// An empty body comes back as `Value::Null`.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}

/// Mount a session with nucleus at the center and mitochondria at the
/// upper right; returns its ID.
pub async fn mount_cell_session(app: Router) -> String {
    let (status, json) = post_json(
        app,
        "/api/v1/sessions",
        &serde_json::json!({
            "hotspots": [
                { "key": "nucleus", "x": 0.5, "y": 0.5 },
                { "key": "mitochondria", "x": 0.8, "y": 0.25 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["session_id"].as_str().unwrap().to_owned()
}
