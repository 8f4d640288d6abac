/// SQLite-backed store for habits and habit log records
///
/// This module provides the Store, the single component behind the menu. It
/// handles all SQL statements, parameter binding and row mapping. Every
/// operation opens its own connection and closes it on return, and every
/// failure is logged in full and then collapsed into a benign result, so
/// callers only ever see "it worked" or "it produced nothing".

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::error;

use crate::domain::{Habit, HabitLogRecord, MonthlyAggregate};
use crate::storage::{schema, StoreError};

/// The persistence and query layer of the habit tracker
///
/// The only state is the database file path the Store was constructed with.
/// Connections are opened per operation and dropped before the operation
/// returns, on success and failure alike.
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    /// Create a store for the given database file
    ///
    /// Nothing is opened here; the file is touched for the first time by
    /// whichever operation runs first (usually `ensure_schema`).
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Open a connection for one operation
    ///
    /// Referential integrity is off by default in SQLite, so every
    /// connection switches it on before running its statement.
    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path).map_err(|e| {
            StoreError::Open(format!(
                "failed to open database {}: {}",
                self.db_path.display(),
                e
            ))
        })?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Create the habits and habitlog tables if they are absent
    ///
    /// Safe to call on every startup regardless of prior state. Returns
    /// false (after logging the cause) when the schema could not be put in
    /// place; it never raises.
    pub fn ensure_schema(&self) -> bool {
        match self.try_ensure_schema() {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to create database schema: {}", e);
                false
            }
        }
    }

    fn try_ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.open()?;
        schema::create_tables(&conn)
    }

    /// Insert a new habit with the given name and uom
    ///
    /// The record's id field is ignored; the database assigns row ids.
    /// Returns true iff exactly one row was inserted. Empty strings are not
    /// rejected here, that is the caller's responsibility.
    pub fn add_habit(&self, habit: &Habit) -> bool {
        match self.try_add_habit(habit) {
            Ok(inserted) => inserted,
            Err(e) => {
                error!("Failed to add habit '{}': {}", habit.name, e);
                false
            }
        }
    }

    fn try_add_habit(&self, habit: &Habit) -> Result<bool, StoreError> {
        let conn = self.open()?;
        let rows = conn.execute(
            "INSERT INTO habits (name, uom) VALUES (?1, ?2)",
            params![habit.name, habit.uom],
        )?;
        Ok(rows == 1)
    }

    /// Get all habits, ordered by name ascending
    ///
    /// Ordering uses SQLite's default BINARY collation, so it is
    /// case-sensitive. Returns an empty vector when there are no habits and
    /// also when the read fails; the two cases are told apart only in the
    /// log.
    pub fn get_habits(&self) -> Vec<Habit> {
        match self.try_get_habits() {
            Ok(habits) => habits,
            Err(e) => {
                error!("Failed to read habits: {}", e);
                Vec::new()
            }
        }
    }

    fn try_get_habits(&self) -> Result<Vec<Habit>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, uom
             FROM habits
             ORDER BY name ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Habit {
                id: row.get(0)?,
                name: row.get(1)?,
                uom: row.get(2)?,
            })
        })?;

        let mut habits = Vec::new();
        for habit in rows {
            habits.push(habit?);
        }
        Ok(habits)
    }

    /// Get the single habit with the given id
    ///
    /// Returns None when no row matches and also when the read fails.
    pub fn get_habit(&self, id: i64) -> Option<Habit> {
        match self.try_get_habit(id) {
            Ok(habit) => habit,
            Err(e) => {
                error!("Failed to read habit {}: {}", id, e);
                None
            }
        }
    }

    fn try_get_habit(&self, id: i64) -> Result<Option<Habit>, StoreError> {
        let conn = self.open()?;
        let habit = conn
            .query_row(
                "SELECT name, uom
                 FROM habits
                 WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Habit {
                        id,
                        name: row.get(0)?,
                        uom: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(habit)
    }

    /// Insert a new log record with the given habit id, date and quantity
    ///
    /// The record's id field is ignored; the database assigns row ids.
    /// Returns true iff exactly one row was inserted. A habit_id that does
    /// not reference an existing habit is rejected by the foreign key
    /// constraint and reported as false. Future dates and negative
    /// quantities are accepted.
    pub fn add_log_record(&self, record: &HabitLogRecord) -> bool {
        match self.try_add_log_record(record) {
            Ok(inserted) => inserted,
            Err(e) => {
                error!(
                    "Failed to add log record for habit {}: {}",
                    record.habit_id, e
                );
                false
            }
        }
    }

    fn try_add_log_record(&self, record: &HabitLogRecord) -> Result<bool, StoreError> {
        let conn = self.open()?;
        let rows = conn.execute(
            "INSERT INTO habitlog (habit_id, date, quantity) VALUES (?1, ?2, ?3)",
            params![record.habit_id, record.date, record.quantity],
        )?;
        Ok(rows == 1)
    }

    /// Update date and quantity of the log record matching the record's id
    ///
    /// habit_id is never changed by this operation. Returns true iff exactly
    /// one row was affected; an id that matches nothing is reported as
    /// false like any other failure.
    pub fn update_log_record(&self, record: &HabitLogRecord) -> bool {
        match self.try_update_log_record(record) {
            Ok(updated) => updated,
            Err(e) => {
                error!("Failed to update log record {}: {}", record.id, e);
                false
            }
        }
    }

    fn try_update_log_record(&self, record: &HabitLogRecord) -> Result<bool, StoreError> {
        let conn = self.open()?;
        let rows = conn.execute(
            "UPDATE habitlog
             SET date = ?2, quantity = ?3
             WHERE id = ?1",
            params![record.id, record.date, record.quantity],
        )?;
        Ok(rows == 1)
    }

    /// Delete the log record with the given id
    ///
    /// Returns true iff exactly one row was deleted.
    pub fn delete_log_record(&self, id: i64) -> bool {
        match self.try_delete_log_record(id) {
            Ok(deleted) => deleted,
            Err(e) => {
                error!("Failed to delete log record {}: {}", id, e);
                false
            }
        }
    }

    fn try_delete_log_record(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.open()?;
        let rows = conn.execute("DELETE FROM habitlog WHERE id = ?1", params![id])?;
        Ok(rows == 1)
    }

    /// Get all log records for the given habit, ordered by date ascending
    ///
    /// Dates are normalized to calendar-date granularity on read: a value
    /// that was stored with a time-of-day component comes back as its date.
    /// Returns an empty vector when there are no records and also when the
    /// read fails.
    pub fn get_log_records(&self, habit_id: i64) -> Vec<HabitLogRecord> {
        match self.try_get_log_records(habit_id) {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to read log records for habit {}: {}", habit_id, e);
                Vec::new()
            }
        }
    }

    fn try_get_log_records(&self, habit_id: i64) -> Result<Vec<HabitLogRecord>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, quantity
             FROM habitlog
             WHERE habit_id = ?1
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map(params![habit_id], |row| {
            let raw_date: String = row.get(1)?;
            let date = parse_stored_date(&raw_date).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

            Ok(HabitLogRecord {
                id: row.get(0)?,
                habit_id,
                date,
                quantity: row.get(2)?,
            })
        })?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    /// Get per-month frequency and total for the given habit
    ///
    /// Records are grouped by the date's calendar year and month; each group
    /// carries the record count and the sum of quantities, ordered by year
    /// then month ascending. The aggregate fields are narrow i16 values; a
    /// group that no longer fits is a failed read, which collapses into the
    /// benign empty result like any other failure.
    pub fn get_frequency_and_totals_per_month(&self, habit_id: i64) -> Vec<MonthlyAggregate> {
        match self.try_get_frequency_and_totals_per_month(habit_id) {
            Ok(aggregates) => aggregates,
            Err(e) => {
                error!("Failed to build monthly report for habit {}: {}", habit_id, e);
                Vec::new()
            }
        }
    }

    fn try_get_frequency_and_totals_per_month(
        &self,
        habit_id: i64,
    ) -> Result<Vec<MonthlyAggregate>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT CAST(strftime('%Y', date) AS INTEGER) AS year,
                    CAST(strftime('%m', date) AS INTEGER) AS month,
                    COUNT(*) AS frequency,
                    SUM(quantity) AS total
             FROM habitlog
             JOIN habits ON habitlog.habit_id = habits.id
             WHERE habit_id = ?1
             GROUP BY year, month
             ORDER BY year, month",
        )?;

        let rows = stmt.query_map(params![habit_id], |row| {
            Ok(MonthlyAggregate {
                year: row.get(0)?,
                month: row.get(1)?,
                frequency: row.get(2)?,
                total: row.get(3)?,
            })
        })?;

        let mut aggregates = Vec::new();
        for aggregate in rows {
            aggregates.push(aggregate?);
        }
        Ok(aggregates)
    }
}

/// Parse a date stored as text, discarding any time-of-day component
///
/// Stored values are normally plain `YYYY-MM-DD`, but a datetime that ended
/// up in the column is still read back as its calendar date.
fn parse_stored_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
}
