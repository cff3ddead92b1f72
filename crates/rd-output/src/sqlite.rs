//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `operations`, `tick_summaries` and `catastrophes`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CatastropheRow, OperationRecord, OutputResult, TickSummaryRow};

/// Writes mission output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS operations (
                 time         INTEGER NOT NULL,
                 kind         TEXT    NOT NULL,
                 vehicle      TEXT    NOT NULL,
                 node         TEXT    NOT NULL,
                 duration_min REAL    NOT NULL,
                 payload      TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick       INTEGER PRIMARY KEY,
                 operations INTEGER NOT NULL,
                 destroyed  INTEGER NOT NULL,
                 replanned  INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS catastrophes (
                 name        TEXT    PRIMARY KEY,
                 deadline    INTEGER NOT NULL,
                 status      TEXT    NOT NULL,
                 resolved_at INTEGER,
                 outstanding INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_operations(&mut self, rows: &[OperationRecord]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO operations (time, kind, vehicle, node, duration_min, payload) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time as i64,
                    row.kind,
                    row.vehicle,
                    row.node,
                    row.duration_min,
                    row.payload,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, operations, destroyed, replanned) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.tick as i64, row.operations as i64, row.destroyed, row.replanned],
        )?;
        Ok(())
    }

    fn write_catastrophes(&mut self, rows: &[CatastropheRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO catastrophes \
                 (name, deadline, status, resolved_at, outstanding) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.name,
                    row.deadline as i64,
                    row.status,
                    row.resolved_at.map(|t| t as i64),
                    row.outstanding,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
