//! Output formatting for the terminal.

use relq_core::{messages, Row};
use relq_session::{RowSink, StatementOutcome};

/// Sink that renders a tabular result as a plain-text table.
///
/// Header and rows are appended as they stream off the cursor; the whole
/// result set is never collected.
#[derive(Debug, Default)]
pub struct TextTable {
    out: String,
    columns: usize,
}

impl TextTable {
    /// Create an empty table sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the sink and produce the rendered block.
    pub fn finish(self, rows: u64) -> String {
        if rows == 0 {
            return "(no results)".to_string();
        }
        let mut out = self.out;
        out.push_str(&format!("\n({} rows)", rows));
        out
    }
}

impl RowSink for TextTable {
    fn header(&mut self, columns: &[String]) {
        self.columns = columns.len();
        self.out.push_str(&columns.join(" | "));
        self.out.push('\n');
        self.out.push_str(&"-".repeat(self.columns * 15));
        self.out.push('\n');
    }

    fn row(&mut self, row: &Row) {
        let values: Vec<&str> = row.values().iter().map(String::as_str).collect();
        self.out.push_str(&values.join(" | "));
        self.out.push('\n');
    }
}

/// Render one statement outcome as its display block.
///
/// `table` is the sink the statement streamed into; it is only consulted
/// for tabular outcomes. Exactly one block comes out per outcome.
pub fn render_outcome(outcome: &StatementOutcome, table: TextTable) -> String {
    match outcome {
        StatementOutcome::Error { statement, message } => format!(
            "{}\n  {}\n  {}",
            messages::MSG_STATEMENT_ERROR,
            statement.trim(),
            message
        ),
        StatementOutcome::Definition => messages::MSG_DEFINITION_OK.to_string(),
        StatementOutcome::Modification { .. } => messages::MSG_MODIFICATION_OK.to_string(),
        StatementOutcome::Scalar { value } => format!("Calculated value is {}.", value),
        StatementOutcome::Tabular { rows } => table.finish(*rows),
    }
}

/// Print help information.
pub fn print_help() {
    println!("RELQ terminal commands:");
    println!("  @<file>         Execute a batch file");
    println!("  !<command>      Execute a shell command");
    println!("  #<n>            Re-execute the last n-th input (1 <= n <= 20)");
    println!("  ##              Print input history");
    println!("  store V         Store the last statement's tuple count as V");
    println!("  count V <stmt>  Execute <stmt> and store its row count as V");
    println!("  echo V          Print the value of variable V");
    println!("  assert V R W    Check that V and W stand in relation R");
    println!("  profiling-on    Time statements instead of rendering results");
    println!("  profiling-off   Back to normal rendering (default)");
    println!("  help            Show this help");
    println!("  exit, quit      Close the session and leave");
    println!();
    println!("Anything else is executed as statements, separated by ';'.");
}
