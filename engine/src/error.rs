//! Engine boundary errors.

use thiserror::Error;

/// Session-level failures: the engine cannot be reached at all.
///
/// These abort the remaining script. Ordinary per-statement failures never
/// appear here; they are observable only through
/// [`ResultHandle::succeeded`](crate::ResultHandle::succeeded).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session has been closed and can take no further statements.
    #[error("engine session is closed")]
    SessionClosed,

    /// The engine could not be reached.
    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

/// Contract violations in the result-handle protocol.
///
/// A correct caller classifies a handle before touching its cursor, which
/// makes these unreachable; when they do occur they are fatal to the
/// statement, not to the process.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A cursor was opened on a result that is not tabular.
    #[error("cursor opened on a non-tabular result")]
    NotTabular,
}
