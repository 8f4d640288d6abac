/// Menu loop that drives the Store from the terminal
///
/// The shell reads one selection per round, runs the matching screen and
/// returns to the main menu until the user quits or input ends. All
/// persistence failures have already been collapsed by the Store, so the
/// screens only deal in benign results and phrase them for the user.

use std::io::{self, BufRead};

use tracing::info;

use crate::domain::{Habit, HabitLogRecord};
use crate::menu::{input, views};
use crate::storage::Store;

const MAIN_MENU: &str = "\
Main menu
  1) List habits
  2) Add a habit
  3) Show a habit's log
  4) Add a log record
  5) Update a log record
  6) Delete a log record
  7) Monthly report
  0) Quit";

/// The interactive menu, owning the store it drives
pub struct Menu {
    store: Store,
}

impl Menu {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Run the menu against stdin until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        let mut reader = io::stdin().lock();
        self.run_with(&mut reader)
    }

    /// Drive the menu from any line-oriented reader
    pub fn run_with<R: BufRead>(&mut self, reader: &mut R) -> io::Result<()> {
        println!("Habit Tracker");

        loop {
            println!();
            println!("{}", MAIN_MENU);

            let choice = match input::read_line(reader, "> ") {
                Some(choice) => choice,
                None => {
                    info!("Input ended, leaving the menu");
                    break;
                }
            };

            match choice.as_str() {
                "1" => self.list_habits(),
                "2" => self.add_habit(reader),
                "3" => self.show_log(reader),
                "4" => self.add_log_record(reader),
                "5" => self.update_log_record(reader),
                "6" => self.delete_log_record(reader),
                "7" => self.monthly_report(reader),
                "0" => break,
                "" => continue,
                other => println!("Unknown option '{}'.", other),
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn list_habits(&self) {
        let habits = self.store.get_habits();
        println!("{}", views::format_habits(&habits));
    }

    fn add_habit<R: BufRead>(&self, reader: &mut R) {
        let name = match input::read_nonempty(reader, "Habit name: ") {
            Some(name) => name,
            None => return,
        };
        let uom = match input::read_nonempty(reader, "Unit of measure (e.g. minutes): ") {
            Some(uom) => uom,
            None => return,
        };

        let habit = Habit::new(name, uom);
        if self.store.add_habit(&habit) {
            println!("✅ Added habit '{}'.", habit.name);
        } else {
            println!("Could not add the habit. See the log for details.");
        }
    }

    fn show_log<R: BufRead>(&self, reader: &mut R) {
        let habit = match self.prompt_for_habit(reader) {
            Some(habit) => habit,
            None => return,
        };

        let records = self.store.get_log_records(habit.id);
        println!("Log for '{}' ({}):", habit.name, habit.uom);
        println!("{}", views::format_log_records(&records));
    }

    fn add_log_record<R: BufRead>(&self, reader: &mut R) {
        let habit = match self.prompt_for_habit(reader) {
            Some(habit) => habit,
            None => return,
        };
        let date = match input::read_date(reader, "Date (YYYY-MM-DD): ") {
            Some(date) => date,
            None => return,
        };
        let quantity = match input::read_i32(reader, &format!("Quantity ({}): ", habit.uom)) {
            Some(quantity) => quantity,
            None => return,
        };

        if self
            .store
            .add_log_record(&HabitLogRecord::new(habit.id, date, quantity))
        {
            println!(
                "✅ Logged {} {} of '{}' on {}.",
                quantity, habit.uom, habit.name, date
            );
        } else {
            println!("Could not add the log record. See the log for details.");
        }
    }

    fn update_log_record<R: BufRead>(&self, reader: &mut R) {
        let id = match input::read_i64(reader, "Log record id: ") {
            Some(id) => id,
            None => return,
        };
        let date = match input::read_date(reader, "New date (YYYY-MM-DD): ") {
            Some(date) => date,
            None => return,
        };
        let quantity = match input::read_i32(reader, "New quantity: ") {
            Some(quantity) => quantity,
            None => return,
        };

        // Only date and quantity are updated; habit_id is not touched
        let record = HabitLogRecord {
            id,
            habit_id: 0,
            date,
            quantity,
        };

        if self.store.update_log_record(&record) {
            println!("✅ Log record {} updated.", id);
        } else {
            println!("Nothing was updated. Check the log record id.");
        }
    }

    fn delete_log_record<R: BufRead>(&self, reader: &mut R) {
        let id = match input::read_i64(reader, "Log record id: ") {
            Some(id) => id,
            None => return,
        };

        if self.store.delete_log_record(id) {
            println!("✅ Log record {} deleted.", id);
        } else {
            println!("Nothing was deleted. Check the log record id.");
        }
    }

    fn monthly_report<R: BufRead>(&self, reader: &mut R) {
        let habit = match self.prompt_for_habit(reader) {
            Some(habit) => habit,
            None => return,
        };

        let report = self.store.get_frequency_and_totals_per_month(habit.id);
        println!("Monthly report for '{}' ({}):", habit.name, habit.uom);
        println!("{}", views::format_monthly_report(&report));
    }

    /// Ask for a habit id and resolve it, reporting unknown ids
    fn prompt_for_habit<R: BufRead>(&self, reader: &mut R) -> Option<Habit> {
        let id = input::read_i64(reader, "Habit id: ")?;
        match self.store.get_habit(id) {
            Some(habit) => Some(habit),
            None => {
                println!("No habit with id {}.", id);
                None
            }
        }
    }
}
