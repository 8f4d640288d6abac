/// End-to-end tests covering the full habit tracking workflow
use chrono::NaiveDate;
use habit_tracker::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_full_tracking_workflow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = Store::new(temp_file.path().to_path_buf());

        assert!(store.ensure_schema());

        // Two habits, listed alphabetically
        assert!(store.add_habit(&Habit::new("Water", "glasses")));
        assert!(store.add_habit(&Habit::new("Running", "minutes")));

        let habits = store.get_habits();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Running");
        assert_eq!(habits[1].name, "Water");

        let water = habits[1].clone();

        // Log some glasses across two months
        assert!(store.add_log_record(&HabitLogRecord::new(water.id, date(2024, 1, 5), 3)));
        assert!(store.add_log_record(&HabitLogRecord::new(water.id, date(2024, 1, 20), 2)));
        assert!(store.add_log_record(&HabitLogRecord::new(water.id, date(2024, 2, 1), 5)));

        let records = store.get_log_records(water.id);
        assert_eq!(records.len(), 3);

        // Fix up one record and drop another
        let mut second = records[1].clone();
        second.quantity = 4;
        assert!(store.update_log_record(&second));
        assert!(store.delete_log_record(records[2].id));

        // The report reflects the edits
        let report = store.get_frequency_and_totals_per_month(water.id);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].year, 2024);
        assert_eq!(report[0].month, 1);
        assert_eq!(report[0].frequency, 2);
        assert_eq!(report[0].total, 7);
    }

    #[test]
    fn test_database_persists_across_store_instances() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let store = Store::new(db_path.clone());
            assert!(store.ensure_schema());
            assert!(store.add_habit(&Habit::new("Reading", "pages")));
        }

        // A second store over the same file sees the first one's data
        let store = Store::new(db_path);
        assert!(store.ensure_schema());

        let habits = store.get_habits();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Reading");
        assert_eq!(habits[0].uom, "pages");
    }

    #[test]
    fn test_menu_session_round_trip() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = Store::new(temp_file.path().to_path_buf());
        assert!(store.ensure_schema());

        // Add a habit, log it twice, browse every screen, then quit
        let script = "2\nWater\nglasses\n\
                      4\n1\n2024-01-05\n3\n\
                      4\n1\n2024-02-01\n5\n\
                      1\n\
                      3\n1\n\
                      7\n1\n\
                      0\n";
        let mut input = std::io::Cursor::new(script);

        let mut menu = Menu::new(store);
        menu.run_with(&mut input).expect("menu session should not fail");

        let store = Store::new(temp_file.path().to_path_buf());
        let records = store.get_log_records(1);
        assert_eq!(records.len(), 2);

        let report = store.get_frequency_and_totals_per_month(1);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].total, 3);
        assert_eq!(report[1].total, 5);
    }
}
