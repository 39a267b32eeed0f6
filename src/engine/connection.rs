use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{BatchError, QueryError, WorkbenchError};
use crate::results::QueryGrid;

use super::config::ConnectionOptions;
use super::worker::EngineWorker;

/// Handle to the embedded workbench database.
///
/// The actual `rusqlite` connection lives on a dedicated worker thread;
/// this handle is cheap to clone and all clones talk to the same database.
/// Overlapping calls are served one at a time, in arrival order.
#[derive(Clone)]
pub struct Connection {
    worker: Arc<EngineWorker>,
    database_path: PathBuf,
}

impl Connection {
    /// Open (creating if absent) the persistent database the options name.
    ///
    /// Intended to be called once per process and reused for all queries;
    /// the same store should not be opened through two live connections at
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbenchError`] if the data directory cannot be created,
    /// the database cannot be opened, or the worker thread cannot start.
    pub fn open(options: ConnectionOptions) -> Result<Self, WorkbenchError> {
        std::fs::create_dir_all(&options.data_dir)?;
        let database_path = options.database_path();

        let conn = rusqlite::Connection::open(&database_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;

        let worker = EngineWorker::spawn(conn)?;
        tracing::debug!(path = %database_path.display(), "opened workbench database");

        Ok(Self {
            worker: Arc::new(worker),
            database_path,
        })
    }

    /// Execute one query and collect its output as a display grid.
    ///
    /// The query runs with no bound parameters; callers interpolate any
    /// values into the SQL text themselves.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] carrying the underlying diagnostic text if
    /// preparation, execution, or cell rendering fails.
    pub async fn run_query(&self, sql: &str) -> Result<QueryGrid, QueryError> {
        self.worker
            .run_query(sql.to_owned())
            .await
            .map_err(QueryError::from)
    }

    /// Execute a batch of one or more statements, discarding any rows.
    ///
    /// The whole batch runs inside a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] on any failure. The cause is logged but not
    /// reported; batch callers can only observe that the batch failed.
    pub async fn execute_batch(&self, sql: &str) -> Result<(), BatchError> {
        self.worker
            .execute_batch(sql.to_owned())
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "batch execution failed");
                BatchError
            })
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("database_path", &self.database_path)
            .finish_non_exhaustive()
    }
}
