//! The engine capability surface.

use relq_core::Row;

use crate::error::{EngineError, ProtocolError};

/// A live connection to the query engine, scoped to one script.
///
/// Dropping the session is the engine teardown. The session layer owns the
/// value and drops it exactly once, after the entire script has been
/// processed — never once per statement.
pub trait EngineSession {
    /// Per-statement result handle produced by this engine.
    type Handle: ResultHandle;

    /// Submit one separator-terminated statement for execution.
    ///
    /// Ordinary statement failures (syntax errors, constraint violations)
    /// never produce an `Err`: they come back as a handle whose
    /// [`ResultHandle::succeeded`] reports false. `Err` means the engine
    /// itself is unreachable, which aborts the rest of the script.
    fn submit(&mut self, statement: &str) -> Result<Self::Handle, EngineError>;
}

/// Opaque outcome of one submitted statement.
///
/// The kind predicates are not guaranteed to be mutually exclusive; the
/// session layer commits to a single kind via a fixed priority order.
/// Dropping the handle releases its engine resources, exactly once,
/// whichever branch was taken.
pub trait ResultHandle {
    /// Forward-only row cursor over a tabular result.
    type Cursor: RowCursor;

    /// True unless the statement failed (syntax/semantic/engine error).
    fn succeeded(&self) -> bool;

    /// Engine diagnostic for a failed statement.
    fn error_message(&self) -> Option<String>;

    /// True if the statement altered schema.
    fn is_definition(&self) -> bool;

    /// True if the statement altered data without returning rows.
    fn is_modification(&self) -> bool;

    /// True if the statement computed a single value.
    fn is_scalar(&self) -> bool;

    /// The computed value for a scalar result.
    fn scalar_value(&self) -> Option<String>;

    /// Count of affected tuples for a successful modification, 0 otherwise.
    fn affected_count(&self) -> u64;

    /// True if the statement produced a row set.
    fn is_tabular(&self) -> bool;

    /// Open a cursor over a tabular result.
    ///
    /// Valid only when [`is_tabular`](Self::is_tabular) reports true;
    /// calling it on any other handle is a contract violation reported as
    /// [`ProtocolError::NotTabular`].
    fn open_cursor(&mut self) -> Result<Self::Cursor, ProtocolError>;
}

/// Forward-only, single-pass iterator over the rows of one tabular result.
///
/// Cursors are fused: once `next_row` returns `None` it keeps returning
/// `None`. Dropping the cursor releases it.
pub trait RowCursor {
    /// Pull the next row, or `None` once the result set is exhausted.
    fn next_row(&mut self) -> Option<Row>;
}
