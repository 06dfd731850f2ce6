//! Moonbot Server - the HTTP surface
//!
//! Thin axum layer over the core interpreter and the SQLite store:
//! - `GET /` - service banner
//! - `GET /position` - current pose
//! - `POST /execute` - run a command string against the current pose

pub mod errors;
pub mod routes;
pub mod schemas;
pub mod state;

pub use routes::app;
pub use state::AppState;
