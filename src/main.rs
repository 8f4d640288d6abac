/// Main entry point for the habit tracker
///
/// This file sets up logging, parses command line arguments, resolves the
/// database location and hands the store to the interactive menu.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use habit_tracker::{Menu, Store};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try the preferred locations in order
    let candidates = [
        // 1. User's home directory
        dirs::home_dir().map(|mut p| {
            p.push(".habit-tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit-tracker");
            p
        }),
    ];

    for dir in candidates.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            // Check the directory is actually writable before settling on it
            let probe = dir.join(".write-probe");
            if std::fs::write(&probe, "ok").is_ok() {
                let _ = std::fs::remove_file(&probe);
                return Ok(dir.join("habits.db"));
            }
        }
    }

    // Last resort: the temporary directory
    let dir = std::env::temp_dir().join("habit-tracker");
    std::fs::create_dir_all(&dir)?;

    warn!("Using temporary directory for database: {}", dir.display());
    Ok(dir.join("habits.db"))
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Logs go to stderr, the menu owns stdout
        .init();

    // Determine database path
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let store = Store::new(db_path.clone());
    if !store.ensure_schema() {
        eprintln!(
            "Could not prepare the database at {}. See the log for details.",
            db_path.display()
        );
        std::process::exit(1);
    }

    let mut menu = Menu::new(store);
    menu.run()?;

    info!("Habit tracker shutdown complete");
    Ok(())
}
