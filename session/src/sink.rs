//! Row sinks.
//!
//! A sink receives a tabular result as it streams off the cursor, one row
//! at a time; the executor never collects rows. The header is emitted
//! exactly once, before any row, with the column names of the first row in
//! engine-delivered order. Every subsequent row shares that column set and
//! order (the engine's contract, not checked here).

use relq_core::Row;

/// Receives one tabular result as it is streamed.
pub trait RowSink {
    /// Called once, with the first row's column names in delivery order.
    fn header(&mut self, columns: &[String]);

    /// Called for every row, first row included, in delivery order.
    fn row(&mut self, row: &Row);
}

/// A sink that discards everything.
///
/// Used when only the row count matters, e.g. profiling runs that drain
/// the cursor without rendering.
#[derive(Debug, Default)]
pub struct NullSink;

impl RowSink for NullSink {
    fn header(&mut self, _columns: &[String]) {}

    fn row(&mut self, _row: &Row) {}
}
