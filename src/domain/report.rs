/// Monthly report record
///
/// Derived data only: aggregates are computed from habitlog rows on demand
/// and never persisted.

use serde::{Deserialize, Serialize};

/// Count and sum of a habit's log records for one calendar month
///
/// All four fields are narrow i16 values. A group whose count or sum no
/// longer fits is a failed read in the storage layer, not a wrapped number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Four-digit calendar year
    pub year: i16,
    /// Month number, 1 through 12
    pub month: i16,
    /// How many log records fell in this month
    pub frequency: i16,
    /// Sum of the quantities logged in this month
    pub total: i16,
}
