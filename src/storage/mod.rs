//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - training(id, week_number, day_of_week, training_content, sets, completed)
//!
//! Every operation is one auto-committed statement on a pooled connection.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, DEFAULT_POOL_SIZE};
