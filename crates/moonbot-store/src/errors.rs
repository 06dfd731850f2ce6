//! Error handling for moonbot-store
//!
//! Wraps moonbot-core RobotError with store-specific helpers

use moonbot_core::RobotError;

/// Result type alias using RobotError
pub type Result<T> = std::result::Result<T, RobotError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> RobotError {
    RobotError::Persistence {
        op: "sqlite".to_string(),
        reason: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RobotError {
    RobotError::Persistence {
        op: "migration".to_string(),
        reason: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> RobotError {
    RobotError::Io {
        op: operation.to_string(),
        reason: err.to_string(),
    }
}
