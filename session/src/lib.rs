//! RELQ session layer.
//!
//! Owns the statement/result protocol between the harness and the engine:
//! submit one statement, classify the returned handle into exactly one
//! [`StatementOutcome`], stream tabular rows through a [`RowSink`], and
//! release every handle and cursor on every exit path.

mod error;
mod executor;
mod result;
mod sink;

pub use error::{SessionError, SessionResult};
pub use executor::StatementExecutor;
pub use result::StatementOutcome;
pub use sink::{NullSink, RowSink};
