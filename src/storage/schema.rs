/// Database schema management
///
/// This module holds the table definitions and creates them when they are
/// missing. There is no versioning: the schema is created once and never
/// migrated afterwards.

use rusqlite::Connection;

use crate::storage::StoreError;

/// Habits table: one row per tracked activity
const CREATE_HABITS: &str = "
    CREATE TABLE IF NOT EXISTS habits (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        uom TEXT NOT NULL
    )";

/// Habit log table: one row per dated quantity, referencing a habit
const CREATE_HABITLOG: &str = "
    CREATE TABLE IF NOT EXISTS habitlog (
        id INTEGER PRIMARY KEY,
        habit_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        FOREIGN KEY(habit_id) REFERENCES habits(id)
    )";

/// Create both tables if they are absent
///
/// Two sequential statements on the given connection. Safe to run on every
/// startup regardless of what already exists.
pub fn create_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(CREATE_HABITS, [])?;
    conn.execute(CREATE_HABITLOG, [])?;

    tracing::debug!("database schema is in place");
    Ok(())
}
