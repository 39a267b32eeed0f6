// Embedded database engine.
//
// This module is split into several sub-modules:
// - config: open options for a named persistent database
// - connection: the caller-facing async handle
// - query: result extraction and grid building
// - worker: command channel and the thread that owns the SQLite connection

pub mod config;
pub mod connection;
pub(crate) mod query;
mod worker;

// Re-export the public API
pub use config::ConnectionOptions;
pub use connection::Connection;
