use std::fmt::Write as _;

use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::WorkbenchError;
use crate::results::QueryGrid;

/// Run a prepared statement and collect its full output as a [`QueryGrid`].
///
/// # Errors
///
/// Returns `WorkbenchError` if stepping the statement fails or any cell has
/// no text rendering.
pub(crate) fn build_query_grid(stmt: &mut Statement<'_>) -> Result<QueryGrid, WorkbenchError> {
    let headers: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let column_count = headers.len();

    let mut grid = QueryGrid::new(headers);
    let mut rows_iter = stmt.query([])?;
    while let Some(row) = rows_iter.next()? {
        let mut cells = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            let value: Value = row.get(idx)?;
            cells.push(render_cell(&grid.headers[idx], &value)?);
        }
        grid.push_row(cells);
    }

    Ok(grid)
}

/// Render one cell to its display string.
///
/// NULL has no text rendering, so a NULL cell fails the whole query.
fn render_cell(column: &str, value: &Value) -> Result<String, WorkbenchError> {
    match value {
        Value::Null => Err(WorkbenchError::ExecutionError(format!(
            "column '{column}' holds NULL, which has no text rendering"
        ))),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Real(f) => Ok(f.to_string()),
        Value::Text(s) => Ok(s.clone()),
        Value::Blob(bytes) => Ok(render_blob(bytes)),
    }
}

// SQLite's own literal display form for blobs.
fn render_blob(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(3 + bytes.len() * 2);
    out.push_str("X'");
    for byte in bytes {
        let _ = write!(out, "{byte:02X}");
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_scalar_values() {
        assert_eq!(render_cell("n", &Value::Integer(42)).unwrap(), "42");
        assert_eq!(render_cell("r", &Value::Real(1.5)).unwrap(), "1.5");
        assert_eq!(render_cell("r", &Value::Real(68.0)).unwrap(), "68");
        assert_eq!(
            render_cell("t", &Value::Text("alice".to_string())).unwrap(),
            "alice"
        );
    }

    #[test]
    fn renders_blob_as_sqlite_literal() {
        assert_eq!(
            render_cell("b", &Value::Blob(vec![0xDE, 0xAD])).unwrap(),
            "X'DEAD'"
        );
        assert_eq!(render_cell("b", &Value::Blob(Vec::new())).unwrap(), "X''");
    }

    #[test]
    fn null_cell_is_a_conversion_failure() {
        let err = render_cell("maybe", &Value::Null).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
