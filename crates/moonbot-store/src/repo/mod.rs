//! Repository layer
//!
//! Static functions over `&Connection` / `&Transaction` for the robot's
//! position snapshots and command-execution audit log.

mod robot;

pub use robot::{ExecutionRecord, PositionRecord, RobotRepo};
