//! SQLite storage implementation

use std::path::Path;
use std::time::Duration;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, params, OptionalExtension};
use crate::{Result, Error};
use crate::training::{Training, TrainingInput};
use super::schema;

/// Default maximum number of pooled connections
pub const DEFAULT_POOL_SIZE: u32 = 8;

const SELECT_COLUMNS: &str =
    "SELECT id, week_number, day_of_week, training_content, sets, completed FROM training";

/// Pooled SQLite storage for training records.
///
/// Cloning is cheap: clones share the same pool. Each operation checks out one
/// connection for a single auto-committed statement and returns it on drop.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_pool_size(path, DEFAULT_POOL_SIZE)
    }

    /// Open a database file with an explicit pool ceiling
    pub fn open_with_pool_size(path: &Path, pool_size: u32) -> Result<Self> {
        // Initialize on a plain connection first so an unusable path fails
        // immediately instead of after the pool's connection timeout.
        let conn = Connection::open(path)?;
        initialize_schema(&conn)?;
        drop(conn);

        let pool = Pool::builder()
            .max_size(pool_size.max(1))
            .connection_timeout(Duration::from_secs(30))
            .build(SqliteConnectionManager::file(path))?;

        tracing::debug!("Opened {:?} with pool size {}", path, pool_size.max(1));
        Ok(Self { pool })
    }

    /// Open an in-memory database (for testing)
    ///
    /// Pinned to a single connection that never expires, since every
    /// in-memory connection is its own database.
    pub fn open_in_memory() -> Result<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(SqliteConnectionManager::memory())?;
        let store = Self { pool };
        let conn = store.conn()?;
        initialize_schema(&conn)?;
        drop(conn);
        Ok(store)
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    // ========== Training Operations ==========

    /// Insert a new record and return it with its assigned id
    pub fn create(&self, input: &TrainingInput) -> Result<Training> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO training (week_number, day_of_week, training_content, sets, completed)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                input.week_number,
                input.day_of_week,
                input.training_content,
                input.sets,
                input.completed,
            ],
        )?;
        let training = input.clone().into_training(conn.last_insert_rowid());
        tracing::debug!("Created training {}", training);
        Ok(training)
    }

    /// All records in insertion order
    pub fn list(&self) -> Result<Vec<Training>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;

        let trainings = stmt
            .query_map([], row_to_training)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(trainings)
    }

    /// Get a record by id
    pub fn get(&self, id: i64) -> Result<Training> {
        self.conn()?
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], row_to_training)
            .optional()?
            .ok_or(Error::NotFound(id))
    }

    /// Overwrite every field of an existing record.
    ///
    /// Returns the input merged with `id` rather than re-reading the row.
    pub fn update(&self, id: i64, input: &TrainingInput) -> Result<Training> {
        let affected = self.conn()?.execute(
            r#"
            UPDATE training
            SET week_number = ?1, day_of_week = ?2, training_content = ?3, sets = ?4, completed = ?5
            WHERE id = ?6
            "#,
            params![
                input.week_number,
                input.day_of_week,
                input.training_content,
                input.sets,
                input.completed,
                id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::NotFound(id));
        }
        let training = input.clone().into_training(id);
        tracing::debug!("Updated training {}", training);
        Ok(training)
    }

    /// Delete a record by id
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn()?.execute("DELETE FROM training WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::debug!("Deleted training {}", id);
        Ok(())
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn()?.query_row("SELECT COUNT(*) FROM training", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Initialize the database schema. Safe to run on every startup.
fn initialize_schema(conn: &Connection) -> Result<()> {
    for stmt in schema::all_schema_statements() {
        conn.execute(stmt, [])?;
    }
    tracing::debug!("Schema initialized");
    Ok(())
}

/// Helper to convert a row to a Training, by column name
fn row_to_training(row: &rusqlite::Row) -> rusqlite::Result<Training> {
    Ok(Training {
        id: row.get("id")?,
        week_number: row.get("week_number")?,
        day_of_week: row.get("day_of_week")?,
        training_content: row.get("training_content")?,
        sets: row.get("sets")?,
        completed: row.get("completed")?,
    })
}
