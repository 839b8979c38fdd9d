//! Statement execution and result classification.

use relq_core::messages;
use relq_engine::{EngineSession, ResultHandle, RowCursor};

use crate::error::{SessionError, SessionResult};
use crate::result::StatementOutcome;
use crate::sink::RowSink;

/// Executes statements against one engine session.
///
/// The executor owns the session for the duration of one script. Each
/// statement produces exactly one [`StatementOutcome`]; the result handle
/// (and the cursor, when one is opened) is dropped before `execute`
/// returns, whichever branch ran, so resources never leak across statement
/// boundaries. Dropping the executor — normally via [`close`](Self::close)
/// after the last statement — tears the engine session down, once per
/// script and never once per statement.
pub struct StatementExecutor<S: EngineSession> {
    session: S,
}

impl<S: EngineSession> StatementExecutor<S> {
    /// Take ownership of an engine session for one script.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Execute one separator-terminated statement and classify the result.
    ///
    /// Tabular rows are streamed into `sink` one at a time as they come off
    /// the cursor; nothing is collected. The engine's success predicate is
    /// consulted first; on success the kind predicates are consulted in
    /// fixed priority order — definition, modification, scalar, tabular —
    /// and the first that reports true wins. The order is the tie-break
    /// policy for engines whose predicates overlap.
    pub fn execute(
        &mut self,
        statement: &str,
        sink: &mut dyn RowSink,
    ) -> SessionResult<StatementOutcome> {
        let mut handle = self.session.submit(statement)?;

        if !handle.succeeded() {
            let message = handle
                .error_message()
                .unwrap_or_else(|| messages::ERR_STATEMENT_FAILED.to_string());
            return Ok(StatementOutcome::Error {
                statement: statement.to_string(),
                message,
            });
        }

        if handle.is_definition() {
            return Ok(StatementOutcome::Definition);
        }

        if handle.is_modification() {
            return Ok(StatementOutcome::Modification {
                affected: handle.affected_count(),
            });
        }

        if handle.is_scalar() {
            let value = handle.scalar_value().unwrap_or_default();
            return Ok(StatementOutcome::Scalar { value });
        }

        if handle.is_tabular() {
            let mut cursor = handle.open_cursor()?;
            let mut rows = 0u64;
            while let Some(row) = cursor.next_row() {
                if rows == 0 {
                    sink.header(row.columns());
                }
                sink.row(&row);
                rows += 1;
            }
            return Ok(StatementOutcome::Tabular { rows });
        }

        Err(SessionError::unclassified(statement))
    }

    /// Close the session, tearing down engine state.
    ///
    /// Called once per script, after the full statement sequence has been
    /// executed.
    pub fn close(self) {}
}
