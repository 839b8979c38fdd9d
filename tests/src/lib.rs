//! RELQ integration test framework.
//!
//! Provides the `Scenario` builder: a canned engine, a script, and the
//! expected per-statement outcomes. Running a scenario executes the script
//! through the real splitter, executor and renderer, verifies every block,
//! and proves that no handle, cursor or session leaked.

mod error;

pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Expect, Scenario};

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::{Expect, Scenario, ScenarioError, ScenarioResult};
    pub use relq_core::Row;
    pub use relq_engine::scripted::{CannedResult, ScriptedEngine};
}
