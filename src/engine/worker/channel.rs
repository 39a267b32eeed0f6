use tokio::sync::oneshot;

use crate::error::WorkbenchError;
use crate::results::QueryGrid;

pub(super) enum Command {
    RunQuery {
        sql: String,
        respond_to: oneshot::Sender<Result<QueryGrid, WorkbenchError>>,
    },
    ExecuteBatch {
        sql: String,
        respond_to: oneshot::Sender<Result<(), WorkbenchError>>,
    },
    Shutdown,
}
