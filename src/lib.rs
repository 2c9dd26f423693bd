//! # Trainlog - Weekly training log service
//!
//! Stores weekly training entries (week, day, content, sets, completion) in a
//! SQLite table and serves them over a JSON CRUD API.
//!
//! Trainlog provides:
//! - A typed training record model
//! - Pooled SQLite storage with idempotent schema initialization
//! - An axum HTTP server exposing create, list, get, update and delete

pub mod training;
pub mod storage;
pub mod server;
pub mod config;

// Re-exports for convenient access
pub use training::{Training, TrainingInput};
pub use storage::SqliteStore;

/// Result type alias for Trainlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Trainlog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Training not found: {0}")]
    NotFound(i64),
}
