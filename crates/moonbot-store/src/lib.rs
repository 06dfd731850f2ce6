//! Moonbot Store - SQLite persistence layer
//!
//! Provides:
//! - Connection management
//! - Embedded, checksummed migrations
//! - The repository layer: position snapshots and the append-only
//!   command-execution audit log, written in one transaction

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{ExecutionRecord, PositionRecord, RobotRepo};
