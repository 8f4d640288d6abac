/// Interactive terminal menu
///
/// This module implements the text interface of the habit tracker:
/// 1. Reads menu selections and field values from stdin
/// 2. Calls the Store for persistence and queries
/// 3. Prints screens and tables to stdout

pub mod input;
pub mod shell;
pub mod views;

pub use shell::Menu;
