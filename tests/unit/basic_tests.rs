/// Basic unit tests to verify the public library surface
use habit_tracker::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit", "minutes");

        assert_eq!(habit.id, 0);
        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.uom, "minutes");
    }

    #[test]
    fn test_log_record_creation() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let record = HabitLogRecord::new(7, date, 3);

        assert_eq!(record.id, 0);
        assert_eq!(record.habit_id, 7);
        assert_eq!(record.date, date);
        assert_eq!(record.quantity, 3);
    }

    #[test]
    fn test_monthly_aggregate_equality() {
        let a = MonthlyAggregate {
            year: 2024,
            month: 1,
            frequency: 2,
            total: 5,
        };
        let b = a.clone();

        assert_eq!(a, b);
    }

    #[test]
    fn test_store_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = Store::new(temp_file.path().to_path_buf());

        assert!(store.ensure_schema());
        assert!(store.get_habits().is_empty());
    }

    #[test]
    fn test_menu_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = Store::new(temp_file.path().to_path_buf());
        assert!(store.ensure_schema());

        let mut menu = Menu::new(store);

        // An immediately quitting session leaves cleanly
        let mut input = std::io::Cursor::new("0\n");
        assert!(menu.run_with(&mut input).is_ok());
    }
}
