//! Startup configuration
//!
//! Read once from the environment at process start; no runtime-mutable
//! configuration exists. Unparseable values fall back to documented
//! defaults with a warning.

use std::collections::HashSet;
use std::env;

use tracing::warn;

use crate::model::{Coord, Direction, Pose};
use crate::obstacles::{default_obstacles, load_obstacles};

pub const DEFAULT_DB_PATH: &str = "moonbot.db";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Pose seeded into the store on first use
    pub start: Pose,
    /// Immutable blocked cells
    pub obstacles: HashSet<Coord>,
    /// SQLite database path (`:memory:` supported)
    pub db_path: String,
    /// HTTP bind address
    pub addr: String,
}

impl Config {
    /// Build configuration from the environment.
    ///
    /// Variables: `START_X` (4), `START_Y` (2), `START_DIRECTION` (WEST),
    /// `OBSTACLES` (`{(1,4), (3,5), (7,4)}`), `MOONBOT_DB`, `MOONBOT_ADDR`.
    pub fn from_env() -> Self {
        let start_x = int_or(env::var("START_X").ok(), "START_X", 4);
        let start_y = int_or(env::var("START_Y").ok(), "START_Y", 2);
        let facing = direction_or(env::var("START_DIRECTION").ok(), Direction::West);
        let obstacles = match env::var("OBSTACLES") {
            Ok(raw) => load_obstacles(&raw),
            Err(_) => default_obstacles(),
        };

        Config {
            start: Pose::new(start_x, start_y, facing),
            obstacles,
            db_path: env::var("MOONBOT_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            addr: env::var("MOONBOT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        }
    }
}

fn int_or(raw: Option<String>, key: &str, default: i64) -> i64 {
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %s, default, "unparseable integer, using default");
            default
        }),
    }
}

fn direction_or(raw: Option<String>, default: Direction) -> Direction {
    match raw {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            warn!(value = %s, default = %default, "unparseable direction, using default");
            default
        }),
    }
}
