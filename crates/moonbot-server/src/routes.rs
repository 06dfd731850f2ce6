//! Route handlers
//!
//! Each `/execute` holds the connection lock across read-interpret-write,
//! so one request completes fully before the next observes its result.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use moonbot_core::model::coord_label;
use moonbot_core::interpreter::interpret;
use moonbot_store::RobotRepo;

use crate::errors::ApiError;
use crate::schemas::{CommandRequest, CommandResponse, PositionResponse};
use crate::state::AppState;

/// Build the router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/position", get(get_position))
        .route("/execute", post(execute))
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Moon Robot Control API"}))
}

async fn get_position(
    State(state): State<AppState>,
) -> Result<Json<PositionResponse>, ApiError> {
    let conn = state.conn.lock().await;
    let pose = RobotRepo::current_pose(&conn, &state.start)?;
    Ok(Json(pose.into()))
}

async fn execute(
    State(state): State<AppState>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let mut conn = state.conn.lock().await;

    let initial = RobotRepo::current_pose(&conn, &state.start)?;
    let outcome = interpret(initial, &state.obstacles, &req.commands);
    RobotRepo::record_execution(&mut conn, &req.commands, &initial, &outcome.pose, outcome.halted_at)?;

    info!(
        commands = %req.commands,
        initial = %initial,
        result = %outcome.pose,
        halted = outcome.halted_at.is_some(),
        "executed command batch"
    );

    let message = match outcome.halted_at {
        Some(cell) => format!("Stopped due to obstacle at {}", coord_label(cell)),
        None => "Commands executed successfully".to_string(),
    };

    Ok(Json(CommandResponse {
        initial_position: initial.into(),
        final_position: outcome.pose.into(),
        obstacle_hit: outcome.halted_at.map(coord_label),
        message,
    }))
}
