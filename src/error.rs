use thiserror::Error;

/// Errors raised by the embedded engine and the infrastructure around it.
///
/// These cover opening the database, spawning the worker thread, and losing
/// the worker channel. Query-level faults are narrowed into [`QueryError`]
/// or [`BatchError`] at the connection surface.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}

/// Failure delivered by `run_query`.
///
/// Carries the underlying error's text; the message is never empty.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    /// The diagnostic text of the underlying failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<WorkbenchError> for QueryError {
    fn from(err: WorkbenchError) -> Self {
        let mut message = err.to_string();
        if message.is_empty() {
            message = "query execution failed".to_string();
        }
        Self { message }
    }
}

/// Failure delivered by `execute_batch`.
///
/// Deliberately carries no detail: batch callers can observe that execution
/// failed, not why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("batch execution failed")]
pub struct BatchError;
