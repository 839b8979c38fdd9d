//! Session error types.

use thiserror::Error;

use relq_engine::{EngineError, ProtocolError};

/// Session errors.
///
/// Ordinary statement failures are not errors: they are the
/// [`StatementOutcome::Error`](crate::StatementOutcome::Error) kind and
/// never abort the batch. Everything here is exceptional; only
/// [`SessionError::is_fatal`] failures stop the remaining script.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The engine itself is unreachable. Batch-fatal.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Result-handle protocol contract violation. Fatal to the statement
    /// only; remaining statements still execute.
    #[error("protocol misuse: {0}")]
    Protocol(#[from] ProtocolError),

    /// A successful handle satisfied none of the kind predicates.
    #[error("engine returned an unclassifiable result for: {statement}")]
    Unclassified { statement: String },
}

impl SessionError {
    pub fn unclassified(statement: impl Into<String>) -> Self {
        Self::Unclassified {
            statement: statement.into(),
        }
    }

    /// True when the remaining script must not be executed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Engine(_))
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
