/// Domain module containing the data records
///
/// This module defines the records the store persists (Habit,
/// HabitLogRecord) and the derived report record (MonthlyAggregate). They
/// are plain data carriers; the storage layer decides what is accepted.

pub mod habit;
pub mod log;
pub mod report;

// Re-export public types for easy access
pub use habit::Habit;
pub use log::HabitLogRecord;
pub use report::MonthlyAggregate;
