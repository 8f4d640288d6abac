/// HabitLogRecord entity for dated habit quantities
///
/// This module defines the HabitLogRecord struct that represents a single
/// logged occurrence of a habit: which habit, on which day, how much.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated, quantified occurrence of a habit
///
/// Each time the user logs a habit we create one of these. Records can be
/// updated (date and quantity only) and deleted by id; the habit they belong
/// to never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLogRecord {
    /// Row id assigned by the database (0 until the record is stored)
    pub id: i64,
    /// Id of the habit this record belongs to
    pub habit_id: i64,
    /// Calendar day the quantity was logged for, no time component
    pub date: NaiveDate,
    /// Logged amount, in the habit's unit of measure
    pub quantity: i32,
}

impl HabitLogRecord {
    /// Create a log record that has not been stored yet
    ///
    /// The id is left at 0 and assigned by the database on insert. The date
    /// and quantity are accepted as given; nothing stops a future date or a
    /// negative quantity at this level.
    pub fn new(habit_id: i64, date: NaiveDate, quantity: i32) -> Self {
        Self {
            id: 0,
            habit_id,
            date,
            quantity,
        }
    }
}
