//! RELQ engine protocol.
//!
//! The query engine is an external collaborator: parsing, planning,
//! join/projection/sort execution and storage all live on the far side of
//! this crate's traits. The harness sees exactly three capabilities:
//!
//! - `EngineSession`: submit one statement, get back a result handle
//! - `ResultHandle`: success/kind predicates over an opaque outcome
//! - `RowCursor`: forward-only iteration over a tabular result
//!
//! The `scripted` module provides a canned-outcome engine implementing the
//! full surface, with resource accounting, for tests and for driving the
//! harness binary without a real engine.

mod error;
mod protocol;

pub mod scripted;

pub use error::{EngineError, ProtocolError};
pub use protocol::{EngineSession, ResultHandle, RowCursor};
