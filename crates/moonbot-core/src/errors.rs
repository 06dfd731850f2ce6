//! Error facility for the moonbot crates
//!
//! A small, stable taxonomy shared by core, store, and server. Each
//! variant maps to a stable `ERR_*` code used in API responses and tests.

use thiserror::Error;

/// Result type alias using RobotError
pub type Result<T> = std::result::Result<T, RobotError>;

/// Comprehensive error taxonomy for moonbot operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RobotError {
    /// Request payload failed validation at the boundary
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A direction string was not one of NORTH/SOUTH/EAST/WEST
    #[error("Invalid direction: {value}")]
    InvalidDirection { value: String },

    /// A requested record does not exist
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// SQLite read or write failed; surfaced unrecovered, no retries
    #[error("Persistence failure in '{op}': {reason}")]
    Persistence { op: String, reason: String },

    /// I/O failure outside the database (bind, serve)
    #[error("I/O failure in '{op}': {reason}")]
    Io { op: String, reason: String },

    /// JSON (de)serialization failed
    #[error("Serialization failure: {reason}")]
    Serialization { reason: String },

    /// Invariant violation that should never happen
    #[error("Internal error: {reason}")]
    Internal { reason: String },
}

impl RobotError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RobotError::InvalidInput { .. } => "ERR_INVALID_INPUT",
            RobotError::InvalidDirection { .. } => "ERR_INVALID_DIRECTION",
            RobotError::NotFound { .. } => "ERR_NOT_FOUND",
            RobotError::Persistence { .. } => "ERR_PERSISTENCE",
            RobotError::Io { .. } => "ERR_IO",
            RobotError::Serialization { .. } => "ERR_SERIALIZATION",
            RobotError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}
