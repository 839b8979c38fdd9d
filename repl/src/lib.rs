//! RELQ terminal - interactive and batch front end for the query harness.
//!
//! This crate drives the session layer from a terminal or a script file.
//! It is split into modules for better maintainability:
//!
//! - `repl`: terminal state, script execution, command interpretation
//! - `format`: block rendering and the text-table sink
//! - `symbols`: tuple-count symbols, expressions and assertions

mod format;
mod repl;
mod symbols;

pub use format::{print_help, render_outcome, TextTable};
pub use repl::{Repl, HISTORY_SIZE};
pub use symbols::{check_assertion, eval_expr, AssertionOutcome, SymbolTable};
