//! Scenario errors.

use relq_engine::scripted::ResourceLog;
use thiserror::Error;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The script produced a different number of statements than expected.
    #[error("scenario '{scenario}': expected {expected} statements, script split into {actual}")]
    CountMismatch {
        scenario: String,
        expected: usize,
        actual: usize,
    },

    /// A statement's outcome or rendered block did not match.
    #[error("scenario '{scenario}': statement {index} `{statement}`: {message}")]
    Mismatch {
        scenario: String,
        index: usize,
        statement: String,
        message: String,
    },

    /// The engine session failed; the batch was aborted.
    #[error("scenario '{scenario}': batch-fatal engine failure: {message}")]
    Fatal { scenario: String, message: String },

    /// Resource accounting did not balance after the session closed.
    #[error("scenario '{scenario}': resource leak: {log:?}")]
    Leak { scenario: String, log: ResourceLog },
}

impl ScenarioError {
    pub fn count_mismatch(scenario: &str, expected: usize, actual: usize) -> Self {
        Self::CountMismatch {
            scenario: scenario.to_string(),
            expected,
            actual,
        }
    }

    pub fn mismatch(
        scenario: &str,
        index: usize,
        statement: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            scenario: scenario.to_string(),
            index,
            statement: statement.to_string(),
            message: message.into(),
        }
    }

    pub fn fatal(scenario: &str, message: impl Into<String>) -> Self {
        Self::Fatal {
            scenario: scenario.to_string(),
            message: message.into(),
        }
    }

    pub fn leak(scenario: &str, log: ResourceLog) -> Self {
        Self::Leak {
            scenario: scenario.to_string(),
            log,
        }
    }
}

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
