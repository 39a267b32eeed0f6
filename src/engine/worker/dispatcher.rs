use std::sync::mpsc::Receiver;

use crate::engine::query::build_query_grid;
use crate::error::WorkbenchError;
use crate::results::QueryGrid;

use super::channel::Command;

pub(super) fn run_engine_worker(mut conn: rusqlite::Connection, receiver: &Receiver<Command>) {
    while let Ok(command) = receiver.recv() {
        match command {
            Command::Shutdown => break,
            Command::RunQuery { sql, respond_to } => {
                let _ = respond_to.send(run_query(&conn, &sql));
            }
            Command::ExecuteBatch { sql, respond_to } => {
                let _ = respond_to.send(execute_batch(&mut conn, &sql));
            }
        }
    }
}

fn run_query(conn: &rusqlite::Connection, sql: &str) -> Result<QueryGrid, WorkbenchError> {
    let mut stmt = conn.prepare(sql)?;
    build_query_grid(&mut stmt)
}

fn execute_batch(conn: &mut rusqlite::Connection, sql: &str) -> Result<(), WorkbenchError> {
    let tx = conn.transaction()?;
    tx.execute_batch(sql)?;
    tx.commit()?;
    Ok(())
}
