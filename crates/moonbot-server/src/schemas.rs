//! Request and response schemas for the HTTP surface

use serde::{Deserialize, Serialize};

use moonbot_core::model::{Direction, Pose};

/// Wire form of a pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionResponse {
    pub x: i64,
    pub y: i64,
    pub direction: Direction,
}

impl From<Pose> for PositionResponse {
    fn from(pose: Pose) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            direction: pose.facing,
        }
    }
}

/// Body of `POST /execute`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub commands: String,
}

/// Response of `POST /execute`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub initial_position: PositionResponse,
    pub final_position: PositionResponse,
    /// `"(x,y)"` of the blocked cell, when execution halted
    pub obstacle_hit: Option<String>,
    pub message: String,
}
