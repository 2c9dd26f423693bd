//! Database schema definitions

/// SQL to create the training table.
///
/// `AUTOINCREMENT` keeps ids monotonic and prevents reuse after deletion.
pub const CREATE_TRAINING_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS training (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    week_number INTEGER NOT NULL,
    day_of_week TEXT NOT NULL,
    training_content TEXT NOT NULL,
    sets INTEGER NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_TRAINING_TABLE]
}
