//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::engine::{Connection, ConnectionOptions};
pub use crate::error::{BatchError, QueryError, WorkbenchError};
pub use crate::results::QueryGrid;
pub use crate::storage::SettingsStore;
pub use crate::timer::{TimerHandle, start_timer};
