//! Async runtime services for an embedded SQL workbench.
//!
//! Three independent facilities, each an explicit handle rather than a
//! process-wide global:
//!
//! - [`engine`]: a persistent embedded `SQLite` database behind an async
//!   adapter. [`Connection::run_query`] returns every result as a
//!   display-oriented grid of strings; [`Connection::execute_batch`] runs
//!   multi-statement batches and reports only success or failure.
//! - [`timer`]: one-shot timers with cancellation.
//! - [`storage`]: a persistent string key-value settings store.

pub mod engine;
pub mod error;
pub mod prelude;
pub mod results;
pub mod storage;
pub mod timer;

pub use engine::{Connection, ConnectionOptions};
pub use error::{BatchError, QueryError, WorkbenchError};
pub use results::QueryGrid;
pub use storage::SettingsStore;
pub use timer::{TimerHandle, start_timer};
