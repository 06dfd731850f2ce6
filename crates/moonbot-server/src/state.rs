//! Shared application state
//!
//! One store connection per process, injected into handlers - never
//! ambient global state. The mutex serializes read-interpret-write
//! cycles so no concurrent `/execute` can lose an update; the obstacle
//! set and start pose are immutable and shared without locking.

use std::collections::HashSet;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use moonbot_core::model::{Coord, Pose};

#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<Mutex<Connection>>,
    pub start: Pose,
    pub obstacles: Arc<HashSet<Coord>>,
}

impl AppState {
    pub fn new(conn: Connection, start: Pose, obstacles: HashSet<Coord>) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            start,
            obstacles: Arc::new(obstacles),
        }
    }
}
