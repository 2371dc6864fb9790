//! Integration tests for the Hotspot Session routes.

mod common;

use axum::http::StatusCode;
use fieldguide_core::engine::HapticIntensity;
use serde_json::json;

#[tokio::test]
async fn test_session_cell_tour_round_trip() {
    let app = common::build_test_app();
    let session_id = common::mount_cell_session(app.router.clone()).await;
    let base = format!("/api/v1/sessions/{session_id}");

    // POST activate
    let (status, json) = common::post_json(
        app.router.clone(),
        &format!("{base}/activate"),
        &json!({ "key": "nucleus" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["events"].as_array().unwrap().len(), 1);
    assert_eq!(json["events"][0]["event_type"], "session.subject_activated");
    assert_eq!(json["events"][0]["sequence_number"], 1);
    assert_eq!(json["events"][0]["payload"]["SubjectActivated"]["key"], "nucleus");
    assert_eq!(json["effects"][0]["type"], "haptic_pulse");
    assert_eq!(json["effects"][0]["intensity"], "light");
    assert_eq!(json["session"]["state"], "presenting");
    assert_eq!(app.haptics.pulses(), vec![HapticIntensity::Light]);

    // GET current
    let (status, json) = common::get_json(app.router.clone(), &format!("{base}/current")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["display_name"], "Nucleus");

    // POST narrate
    let (status, json) =
        common::send(app.router.clone(), "POST", &format!("{base}/narrate"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["effects"][0]["type"], "stop_speech");
    assert_eq!(json["effects"][1]["type"], "speak");
    assert_eq!(json["effects"][1]["text"], "Nucleus detail text");
    assert_eq!(app.speech.spoken_texts(), vec!["Nucleus detail text".to_owned()]);

    // POST dismiss
    let (status, json) =
        common::send(app.router.clone(), "POST", &format!("{base}/dismiss"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["session"]["state"], "idle");
    assert_eq!(json["session"]["selected_key"], "nucleus");

    let (_, json) = common::get_json(app.router.clone(), &format!("{base}/current")).await;
    assert!(json.is_null());

    // POST activate with a bogus key
    let (status, json) = common::post_json(
        app.router.clone(),
        &format!("{base}/activate"),
        &json!({ "key": "bogus" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "subject_not_found");

    let (_, json) = common::get_json(app.router, &base).await;
    assert_eq!(json["presenting"], false);
    assert_eq!(json["version"], 3);
    assert_eq!(app.haptics.pulses().len(), 1);
}

#[tokio::test]
async fn test_session_noops_return_no_events() {
    let app = common::build_test_app();
    let session_id = common::mount_cell_session(app.router.clone()).await;
    let base = format!("/api/v1/sessions/{session_id}");

    let (status, json) =
        common::send(app.router.clone(), "POST", &format!("{base}/narrate"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["events"].as_array().unwrap().is_empty());
    assert!(json["effects"].as_array().unwrap().is_empty());

    let (status, json) =
        common::send(app.router.clone(), "POST", &format!("{base}/dismiss"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["events"].as_array().unwrap().is_empty());

    assert!(app.speech.calls().is_empty());
}

#[tokio::test]
async fn test_session_tap_hits_and_misses() {
    let app = common::build_test_app();
    let session_id = common::mount_cell_session(app.router.clone()).await;
    let base = format!("/api/v1/sessions/{session_id}");

    let (status, json) = common::post_json(
        app.router.clone(),
        &format!("{base}/tap"),
        &json!({ "x": 0.02, "y": 0.98 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["events"].as_array().unwrap().is_empty());
    assert_eq!(json["session"]["state"], "idle");

    let (status, json) = common::post_json(
        app.router.clone(),
        &format!("{base}/tap"),
        &json!({ "x": 0.78, "y": 0.27 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["session"]["selected_key"], "mitochondria");

    let (status, json) = common::post_json(
        app.router,
        &format!("{base}/tap"),
        &json!({ "x": -0.2, "y": 0.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_session_layout_projects_hotspots() {
    let app = common::build_test_app();
    let session_id = common::mount_cell_session(app.router.clone()).await;

    let (status, json) = common::get_json(
        app.router,
        &format!("/api/v1/sessions/{session_id}/layout?width=400&height=800"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let placements = json.as_array().unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0]["key"], "nucleus");
    assert_eq!(placements[0]["x"], 200.0);
    assert_eq!(placements[0]["y"], 400.0);
    assert_eq!(placements[1]["display_name"], "Mitochondria");
    assert_eq!(placements[1]["x"], 320.0);
    assert_eq!(placements[1]["y"], 200.0);
}

#[tokio::test]
async fn test_mount_with_unknown_hotspot_key_returns_404() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app.router,
        "/api/v1/sessions",
        &json!({ "hotspots": [{ "key": "chloroplast", "x": 0.5, "y": 0.5 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "subject_not_found");
}

#[tokio::test]
async fn test_unmount_discards_session() {
    let app = common::build_test_app();
    let session_id = common::mount_cell_session(app.router.clone()).await;
    let base = format!("/api/v1/sessions/{session_id}");

    let (status, _) = common::send(app.router.clone(), "DELETE", &base, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = common::get_json(app.router.clone(), &base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");

    let (status, _) = common::send(app.router, "DELETE", &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mount_past_session_limit_returns_503() {
    let app = common::build_test_app_with_session_limit(1);
    common::mount_cell_session(app.router.clone()).await;

    let (status, json) = common::post_json(
        app.router,
        "/api/v1/sessions",
        &json!({ "hotspots": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "session_limit_reached");
}
