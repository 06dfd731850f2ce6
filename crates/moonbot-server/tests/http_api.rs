// Integration tests for the HTTP surface.
// Each test builds a Router over a fresh in-memory database and drives
// it with tower::ServiceExt::oneshot.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use moonbot_core::model::{Direction, Pose};
use moonbot_core::obstacles::default_obstacles;
use moonbot_server::{app, AppState};
use moonbot_store::migrations::apply_migrations;

fn test_app() -> Router {
    let mut conn = moonbot_store::db::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    let state = AppState::new(
        conn,
        Pose::new(4, 2, Direction::West),
        default_obstacles(),
    );
    app(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn execute(app: &Router, commands: &str) -> Value {
    let (status, body) = post(app, "/execute", json!({ "commands": commands })).await;
    assert_eq!(status, StatusCode::OK, "execute({}) failed: {}", commands, body);
    body
}

#[tokio::test]
async fn test_root_banner() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Moon Robot Control API");
}

#[tokio::test]
async fn test_position_seeds_from_start_pose() {
    let app = test_app();
    let (status, body) = get(&app, "/position").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"x": 4, "y": 2, "direction": "WEST"}));
}

#[tokio::test]
async fn test_position_is_idempotent() {
    let app = test_app();
    let (_, first) = get(&app, "/position").await;
    let (_, second) = get(&app, "/position").await;
    let (_, third) = get(&app, "/position").await;
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_execute_forward() {
    let app = test_app();
    let body = execute(&app, "F").await;
    assert_eq!(body["initial_position"], json!({"x": 4, "y": 2, "direction": "WEST"}));
    assert_eq!(body["final_position"], json!({"x": 3, "y": 2, "direction": "WEST"}));
    assert_eq!(body["obstacle_hit"], Value::Null);
    assert_eq!(body["message"], "Commands executed successfully");
}

#[tokio::test]
async fn test_execute_backward() {
    let app = test_app();
    let body = execute(&app, "B").await;
    assert_eq!(body["final_position"], json!({"x": 5, "y": 2, "direction": "WEST"}));
}

#[tokio::test]
async fn test_execute_rotations() {
    let app = test_app();
    let body = execute(&app, "L").await;
    assert_eq!(body["final_position"], json!({"x": 4, "y": 2, "direction": "SOUTH"}));

    let app = test_app();
    let body = execute(&app, "R").await;
    assert_eq!(body["final_position"], json!({"x": 4, "y": 2, "direction": "NORTH"}));
}

#[tokio::test]
async fn test_execute_case_insensitive() {
    let lower = test_app();
    let upper = test_app();
    let a = execute(&lower, "flr").await;
    let b = execute(&upper, "FLR").await;
    assert_eq!(a["final_position"], b["final_position"]);
    assert_eq!(a["final_position"]["x"], 3);
    assert_eq!(a["final_position"]["direction"], "WEST");
}

#[tokio::test]
async fn test_sequential_calls_compose() {
    let app = test_app();
    let first = execute(&app, "F").await;
    assert_eq!(first["final_position"]["x"], 3);

    let second = execute(&app, "F").await;
    assert_eq!(second["initial_position"], first["final_position"]);
    assert_eq!(second["final_position"]["x"], 2);
}

#[tokio::test]
async fn test_position_reflects_execution() {
    let app = test_app();
    execute(&app, "FFR").await;

    let (status, body) = get(&app, "/position").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"x": 2, "y": 2, "direction": "NORTH"}));
}

#[tokio::test]
async fn test_obstacle_halts_one_step_short() {
    // Walk west past the obstacle column, climb north, turn east: the
    // final F is blocked by (1,4) and the robot stays at (0,4).
    let app = test_app();
    execute(&app, "FFFFR").await;
    execute(&app, "FF").await;
    execute(&app, "R").await;

    let body = execute(&app, "F").await;
    assert_eq!(body["obstacle_hit"], "(1,4)");
    assert_eq!(body["message"], "Stopped due to obstacle at (1,4)");
    assert_eq!(body["final_position"], json!({"x": 0, "y": 4, "direction": "EAST"}));
}

#[tokio::test]
async fn test_halt_discards_remaining_commands() {
    // After FFFR the robot is at (1,2) facing NORTH; the second F of the
    // next batch is blocked by (1,4), so the trailing commands never run.
    let app = test_app();
    execute(&app, "FFFR").await;

    let body = execute(&app, "FFFFRFLB").await;
    assert_eq!(body["obstacle_hit"], "(1,4)");
    assert_eq!(body["final_position"], json!({"x": 1, "y": 3, "direction": "NORTH"}));
}

#[tokio::test]
async fn test_rotations_never_hit_obstacles() {
    let app = test_app();
    execute(&app, "FFFR").await;

    let body = execute(&app, "LRLR").await;
    assert_eq!(body["obstacle_hit"], Value::Null);
    assert_eq!(body["message"], "Commands executed successfully");
}

#[tokio::test]
async fn test_unknown_characters_are_ignored() {
    let app = test_app();
    let body = execute(&app, "F x?7F").await;
    assert_eq!(body["final_position"], json!({"x": 2, "y": 2, "direction": "WEST"}));
    assert_eq!(body["obstacle_hit"], Value::Null);
}

#[tokio::test]
async fn test_missing_commands_field_rejected() {
    let app = test_app();
    let (status, _) = post(&app, "/execute", json!({ "cmd": "F" })).await;
    assert!(status.is_client_error(), "got {}", status);
}

#[tokio::test]
async fn test_wrong_typed_commands_field_rejected() {
    let app = test_app();
    let (status, _) = post(&app, "/execute", json!({ "commands": 5 })).await;
    assert!(status.is_client_error(), "got {}", status);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/execute")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_rejected_payload_does_not_touch_state() {
    let app = test_app();
    execute(&app, "F").await;

    let (status, _) = post(&app, "/execute", json!({ "commands": 5 })).await;
    assert!(status.is_client_error());

    let (_, body) = get(&app, "/position").await;
    assert_eq!(body, json!({"x": 3, "y": 2, "direction": "WEST"}));
}
