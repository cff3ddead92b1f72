//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CatastropheRow, OperationRecord, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`MissionOutputObserver::take_error`](crate::MissionOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of executed operations.
    fn write_operations(&mut self, rows: &[OperationRecord]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the final catastrophe table.
    fn write_catastrophes(&mut self, rows: &[CatastropheRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
