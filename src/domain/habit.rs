/// Habit entity
///
/// This module defines the Habit struct that represents a recurring activity
/// the user wants to track, such as "drink water" measured in glasses.

use serde::{Deserialize, Serialize};

/// A habit is a named activity with a unit of measure
///
/// Habits are created once and read back many times; there is no update or
/// delete path for them. The id is assigned by the database on insert and is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Row id assigned by the database (0 until the habit is stored)
    pub id: i64,
    /// Display name (e.g., "Running", "Read a book")
    pub name: String,
    /// Unit of measure for logged quantities (e.g., "minutes", "glasses")
    pub uom: String,
}

impl Habit {
    /// Create a habit that has not been stored yet
    ///
    /// The id is left at 0; the database assigns the real id when the habit
    /// is inserted. Name and uom are taken as given: keeping them non-empty
    /// is the caller's job, only SQL NOT NULL is enforced below this layer.
    pub fn new(name: impl Into<String>, uom: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            uom: uom.into(),
        }
    }
}
