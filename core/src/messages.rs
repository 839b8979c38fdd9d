//! Common messages used across RELQ components.
//!
//! These constants ensure consistent wording between the session layer and
//! the terminal renderer.

/// Notice: a schema definition statement succeeded.
pub const MSG_DEFINITION_OK: &str = "Definition was successful.";

/// Notice: a data modification statement succeeded.
pub const MSG_MODIFICATION_OK: &str = "Modification was successful.";

/// Heading printed before a failed statement and its diagnostic.
pub const MSG_STATEMENT_ERROR: &str = "An error occurred while processing the statement:";

/// Fallback diagnostic when the engine reports failure without a message.
pub const ERR_STATEMENT_FAILED: &str = "statement failed";
