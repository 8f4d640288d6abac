/// Line-oriented prompt helpers
///
/// All helpers read from a `BufRead` so tests can feed them from a
/// `Cursor` instead of stdin. End of input is reported as `None`, which
/// cancels whatever screen was being filled in. Invalid values print a
/// short hint and re-prompt; they never reach the Store.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::error;

/// Print a prompt and read one trimmed line
///
/// Returns `None` when the input is at end of file or unreadable.
pub fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            error!("Failed to read from stdin: {}", e);
            None
        }
    }
}

/// Prompt until a non-empty line arrives
pub fn read_nonempty<R: BufRead>(reader: &mut R, prompt: &str) -> Option<String> {
    loop {
        let line = read_line(reader, prompt)?;
        if !line.is_empty() {
            return Some(line);
        }
        println!("A value is required.");
    }
}

/// Prompt until a whole number arrives
pub fn read_i64<R: BufRead>(reader: &mut R, prompt: &str) -> Option<i64> {
    loop {
        let line = read_line(reader, prompt)?;
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Prompt until a whole number fitting an i32 arrives
pub fn read_i32<R: BufRead>(reader: &mut R, prompt: &str) -> Option<i32> {
    loop {
        let line = read_line(reader, prompt)?;
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Prompt until a calendar date in YYYY-MM-DD form arrives
pub fn read_date<R: BufRead>(reader: &mut R, prompt: &str) -> Option<NaiveDate> {
    loop {
        let line = read_line(reader, prompt)?;
        match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
            Ok(date) => return Some(date),
            Err(_) => println!("Please enter a date as YYYY-MM-DD, e.g. 2024-05-01."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_whitespace() {
        let mut input = Cursor::new("  hello  \n");
        assert_eq!(read_line(&mut input, "> "), Some("hello".to_string()));
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_line(&mut input, "> "), None);
    }

    #[test]
    fn test_read_nonempty_skips_blank_lines() {
        let mut input = Cursor::new("\n   \nWater\n");
        assert_eq!(read_nonempty(&mut input, "> "), Some("Water".to_string()));
    }

    #[test]
    fn test_read_nonempty_gives_up_at_end_of_input() {
        let mut input = Cursor::new("\n\n");
        assert_eq!(read_nonempty(&mut input, "> "), None);
    }

    #[test]
    fn test_read_i64_reprompts_on_garbage() {
        let mut input = Cursor::new("abc\n12.5\n42\n");
        assert_eq!(read_i64(&mut input, "> "), Some(42));
    }

    #[test]
    fn test_read_i32_accepts_negative_numbers() {
        let mut input = Cursor::new("-3\n");
        assert_eq!(read_i32(&mut input, "> "), Some(-3));
    }

    #[test]
    fn test_read_date_reprompts_on_bad_format() {
        let mut input = Cursor::new("01/05/2024\n2024-13-01\n2024-05-01\n");
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(read_date(&mut input, "> "), Some(expected));
    }

    #[test]
    fn test_read_date_at_end_of_input() {
        let mut input = Cursor::new("not-a-date\n");
        assert_eq!(read_date(&mut input, "> "), None);
    }
}
