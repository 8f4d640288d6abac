/// Storage layer for persisting habit data
///
/// This module owns all database access. The Store opens a fresh SQLite
/// connection per operation, runs exactly one statement against it, and
/// reports failures as benign results after logging them.

pub mod schema;
pub mod store;

// Re-export the main storage types
pub use store::Store;

use thiserror::Error;

/// Errors that can occur inside storage operations
///
/// These never cross the public Store surface; they exist so the failure can
/// be logged with full detail before it is collapsed into the benign result
/// the caller sees.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database connection error: {0}")]
    Open(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),
}
