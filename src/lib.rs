/// Public library interface for the habit tracker
///
/// This module exports the store, the domain records and the interactive
/// menu so other applications and the test suites can drive them directly.

// Internal modules
mod domain;
mod menu;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use menu::Menu;
pub use storage::{Store, StoreError};
