use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::error::WorkbenchError;
use crate::results::QueryGrid;

use super::channel::Command;
use super::dispatcher::run_engine_worker;

/// Owns the channel to the thread holding the actual database handle.
pub(crate) struct EngineWorker {
    sender: Sender<Command>,
}

impl EngineWorker {
    pub(crate) fn spawn(conn: rusqlite::Connection) -> Result<Self, WorkbenchError> {
        let (sender, receiver) = mpsc::channel::<Command>();
        thread::Builder::new()
            .name("sql-workbench-engine".to_string())
            .spawn(move || run_engine_worker(conn, &receiver))
            .map_err(|err| {
                WorkbenchError::ConnectionError(format!(
                    "failed to spawn engine worker thread: {err}"
                ))
            })?;

        Ok(Self { sender })
    }

    fn send_command(&self, command: Command) -> Result<(), WorkbenchError> {
        self.sender
            .send(command)
            .map_err(|_| connection_error("engine worker closed"))
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, WorkbenchError>>) -> Command,
        drop_message: &'static str,
    ) -> Result<T, WorkbenchError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(build(tx))?;
        rx.await.map_err(|_| connection_error(drop_message))?
    }

    pub(crate) async fn run_query(&self, sql: String) -> Result<QueryGrid, WorkbenchError> {
        self.request(
            |respond_to| Command::RunQuery { sql, respond_to },
            "engine worker dropped while running query",
        )
        .await
    }

    pub(crate) async fn execute_batch(&self, sql: String) -> Result<(), WorkbenchError> {
        self.request(
            |respond_to| Command::ExecuteBatch { sql, respond_to },
            "engine worker dropped while executing batch",
        )
        .await
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        let _ = self.sender.send(Command::Shutdown);
    }
}

fn connection_error(message: &str) -> WorkbenchError {
    WorkbenchError::ConnectionError(message.into())
}
