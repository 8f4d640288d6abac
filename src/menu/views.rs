/// Plain-text table renderers for the menu screens
///
/// Every function builds and returns a String so rendering stays
/// unit-testable without touching stdout.

use crate::domain::{Habit, HabitLogRecord, MonthlyAggregate};

/// Format all habits as a table of id, name and uom
pub fn format_habits(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits yet.".to_string();
    }

    let mut output = format!("{:>5}  {:<24}  {}\n", "id", "name", "uom");
    output.push_str(&"─".repeat(46));
    output.push('\n');

    for habit in habits {
        output.push_str(&format!(
            "{:>5}  {:<24}  {}\n",
            habit.id, habit.name, habit.uom
        ));
    }

    output
}

/// Format a habit's log as a table of record id, date and quantity
pub fn format_log_records(records: &[HabitLogRecord]) -> String {
    if records.is_empty() {
        return "No log records yet.".to_string();
    }

    let mut output = format!("{:>5}  {:<10}  {:>8}\n", "id", "date", "quantity");
    output.push_str(&"─".repeat(28));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{:>5}  {}  {:>8}\n",
            record.id,
            record.date.format("%Y-%m-%d"),
            record.quantity
        ));
    }

    output
}

/// Format the monthly report as a table of year, month, frequency and total
pub fn format_monthly_report(aggregates: &[MonthlyAggregate]) -> String {
    if aggregates.is_empty() {
        return "No log records yet.".to_string();
    }

    let mut output = format!(
        "{:>5}  {:>5}  {:>9}  {:>6}\n",
        "year", "month", "frequency", "total"
    );
    output.push_str(&"─".repeat(30));
    output.push('\n');

    for row in aggregates {
        output.push_str(&format!(
            "{:>5}  {:>5}  {:>9}  {:>6}\n",
            row.year,
            format!("{:02}", row.month),
            row.frequency,
            row.total
        ));
    }

    output
}
