use sql_workbench::prelude::*;
use tokio::runtime::Runtime;

#[test]
fn grid_rows_match_headers() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;

        conn.execute_batch(
            "CREATE TABLE scores (player TEXT, round INTEGER, total REAL);
             INSERT INTO scores VALUES ('alice', 1, 70.5);
             INSERT INTO scores VALUES ('bob', 2, 68);",
        )
        .await?;

        let grid = conn
            .run_query("SELECT player, round, total FROM scores ORDER BY player")
            .await?;

        assert_eq!(grid.headers, vec!["player", "round", "total"]);
        assert_eq!(grid.row_count(), 2);
        for row in &grid.rows {
            assert_eq!(row.len(), grid.column_count());
        }
        assert_eq!(grid.rows[0], vec!["alice", "1", "70.5"]);
        assert_eq!(grid.rows[1], vec!["bob", "2", "68"]);

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn blob_cells_render_as_sqlite_literals() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        let grid = conn.run_query("SELECT x'DEAD' AS payload").await?;
        assert_eq!(grid.headers, vec!["payload"]);
        assert_eq!(grid.rows[0], vec!["X'DEAD'"]);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn failed_query_reports_diagnostic_text() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        let err = conn
            .run_query("SELECT definitely FROM nowhere")
            .await
            .unwrap_err();
        assert!(!err.message().is_empty());
        assert!(err.message().contains("nowhere"));
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn null_cell_fails_the_query() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        let err = conn.run_query("SELECT NULL AS missing").await.unwrap_err();
        assert!(!err.message().is_empty());
        assert!(err.message().contains("missing"));
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn failed_batch_reports_no_detail() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        let err = conn
            .execute_batch("THIS IS NOT SQL; NEITHER IS THIS;")
            .await
            .unwrap_err();
        // The batch contract deliberately drops the cause.
        assert_eq!(err, BatchError);
        assert_eq!(err.to_string(), "batch execution failed");
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn batch_is_all_or_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        conn.execute_batch("CREATE TABLE t (id INTEGER);").await?;

        // Second statement fails, so the first insert must roll back.
        let err = conn
            .execute_batch("INSERT INTO t VALUES (1); INSERT INTO missing VALUES (2);")
            .await
            .unwrap_err();
        assert_eq!(err, BatchError);

        let grid = conn.run_query("SELECT count(*) AS cnt FROM t").await?;
        assert_eq!(grid.rows[0], vec!["0"]);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn write_statement_through_run_query_returns_empty_grid()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        conn.execute_batch("CREATE TABLE notes (body TEXT);").await?;

        let grid = conn
            .run_query("INSERT INTO notes VALUES ('remember me')")
            .await?;
        assert_eq!(grid.column_count(), 0);
        assert!(grid.is_empty());

        let grid = conn.run_query("SELECT body FROM notes").await?;
        assert_eq!(grid.rows[0], vec!["remember me"]);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn data_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let options = ConnectionOptions::new(dir.path()).with_database_name("lessons");
        {
            let conn = Connection::open(options.clone())?;
            conn.execute_batch(
                "CREATE TABLE lessons (title TEXT);
                 INSERT INTO lessons VALUES ('joins');",
            )
            .await?;
        }

        let conn = Connection::open(options)?;
        let grid = conn.run_query("SELECT title FROM lessons").await?;
        assert_eq!(grid.rows[0], vec!["joins"]);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}

#[test]
fn clones_share_one_database() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let rt = Runtime::new()?;
    rt.block_on(async move {
        let conn = Connection::open(ConnectionOptions::new(dir.path()))?;
        let writer = conn.clone();
        writer
            .execute_batch("CREATE TABLE shared (id INTEGER); INSERT INTO shared VALUES (7);")
            .await?;

        let grid = conn.run_query("SELECT id FROM shared").await?;
        assert_eq!(grid.rows[0], vec!["7"]);
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;
    Ok(())
}
