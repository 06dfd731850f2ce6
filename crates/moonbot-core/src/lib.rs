//! Moonbot Core - domain model and command interpreter
//!
//! Provides:
//! - The robot's domain model (Pose, Direction, grid coordinates)
//! - The command interpreter: a pure function from (pose, obstacles,
//!   command string) to (final pose, optional obstacle hit)
//! - The obstacle-literal parser and startup configuration
//! - The error and logging facilities shared by the store and server

pub mod config;
pub mod errors;
pub mod interpreter;
pub mod logging;
pub mod model;
pub mod obstacles;

// Re-export key types
pub use errors::{Result, RobotError};
pub use interpreter::{interpret, Interpretation};
pub use model::{coord_label, Coord, Direction, Pose};
