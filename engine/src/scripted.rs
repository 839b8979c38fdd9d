//! Scripted engine.
//!
//! A canned-outcome implementation of the engine protocol. Statement
//! prefixes are paired with fixed results, so harness behavior can be
//! exercised without a real query engine: the test suite drives every
//! classification branch through it, and the `relq` binary loads its rules
//! from a fixture file.
//!
//! Every session, handle and cursor the engine hands out reports its
//! acquisition and release in a shared [`ResourceLog`], so tests can prove
//! the exactly-once release contract on every code path.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use relq_core::Row;
use thiserror::Error;

use crate::error::{EngineError, ProtocolError};
use crate::protocol::{EngineSession, ResultHandle, RowCursor};

/// A canned statement result.
#[derive(Debug, Clone)]
pub enum CannedResult {
    /// The statement fails; `succeeded` reports false.
    Failure(String),
    /// Schema definition.
    Definition,
    /// Data modification with an affected-tuple count.
    Modification(u64),
    /// A single computed value.
    Scalar(String),
    /// A row set, delivered through a cursor in this order.
    Tabular(Vec<Row>),
    /// Succeeds but satisfies no kind predicate.
    ///
    /// No sane engine produces this; it exists to exercise the
    /// unclassifiable-result path in the session layer.
    Unclassified,
}

/// One prefix-to-result rule.
#[derive(Debug, Clone)]
struct Rule {
    /// Uppercased statement prefix to match against.
    prefix: String,
    result: CannedResult,
}

/// Counts of acquired and released engine resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLog {
    pub sessions_opened: usize,
    pub sessions_closed: usize,
    pub handles_opened: usize,
    pub handles_released: usize,
    pub cursors_opened: usize,
    pub cursors_released: usize,
}

impl ResourceLog {
    /// True when everything acquired has been released.
    pub fn is_balanced(&self) -> bool {
        self.sessions_opened == self.sessions_closed
            && self.handles_opened == self.handles_released
            && self.cursors_opened == self.cursors_released
    }
}

/// Shared rule set and default result.
#[derive(Debug, Clone)]
struct RuleSet {
    rules: Vec<Rule>,
    default: CannedResult,
    /// When set, every submission fails at the session level.
    unavailable: Option<String>,
}

/// Error parsing a scripted-engine rule file.
#[derive(Debug, Error)]
#[error("rule file line {line}: {message}")]
pub struct RuleError {
    pub line: usize,
    pub message: String,
}

impl RuleError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A canned-outcome engine.
///
/// Build rules with [`respond`](Self::respond), then open one session per
/// script with [`open_session`](Self::open_session). The engine value stays
/// with the caller so the [`ResourceLog`] can be inspected after the
/// session is gone.
#[derive(Debug)]
pub struct ScriptedEngine {
    ruleset: RuleSet,
    log: Rc<RefCell<ResourceLog>>,
}

impl ScriptedEngine {
    /// Create an engine with no rules; unmatched statements fail.
    pub fn new() -> Self {
        Self::with_rules(RuleSet {
            rules: Vec::new(),
            default: CannedResult::Failure("no canned result for statement".to_string()),
            unavailable: None,
        })
    }

    /// Create an engine whose every submission fails at the session level.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::with_rules(RuleSet {
            rules: Vec::new(),
            default: CannedResult::Failure(String::new()),
            unavailable: Some(message.into()),
        })
    }

    fn with_rules(ruleset: RuleSet) -> Self {
        Self {
            ruleset,
            log: Rc::new(RefCell::new(ResourceLog::default())),
        }
    }

    /// Add a rule: statements starting with `prefix` (case-insensitive,
    /// leading whitespace ignored) get `result`. First matching rule wins.
    pub fn respond(mut self, prefix: &str, result: CannedResult) -> Self {
        self.ruleset.rules.push(Rule {
            prefix: prefix.trim().to_uppercase(),
            result,
        });
        self
    }

    /// Set the result for statements no rule matches.
    pub fn otherwise(mut self, result: CannedResult) -> Self {
        self.ruleset.default = result;
        self
    }

    /// Build an engine from rule-file text.
    ///
    /// One rule per line, `#` comments and blank lines ignored:
    ///
    /// ```text
    /// CREATE  => definition
    /// INSERT  => modification 1
    /// SELECT COUNT => scalar 42
    /// SELECT  => table t.x,t.y | 1,a | 2,b
    /// DROP    => error no such table
    /// ```
    pub fn from_rules(text: &str) -> Result<Self, RuleError> {
        let mut engine = Self::new();
        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (prefix, rhs) = line
                .split_once("=>")
                .ok_or_else(|| RuleError::new(line_no, "expected `prefix => result`"))?;
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(RuleError::new(line_no, "empty statement prefix"));
            }
            let result = parse_result(rhs.trim(), line_no)?;
            engine = engine.respond(prefix, result);
        }
        Ok(engine)
    }

    /// Snapshot of the resource accounting.
    pub fn log(&self) -> ResourceLog {
        self.log.borrow().clone()
    }

    /// Open a session for one script.
    pub fn open_session(&self) -> ScriptedSession {
        self.log.borrow_mut().sessions_opened += 1;
        ScriptedSession {
            ruleset: Rc::new(self.ruleset.clone()),
            log: Rc::clone(&self.log),
        }
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_result(rhs: &str, line: usize) -> Result<CannedResult, RuleError> {
    let (kind, payload) = match rhs.split_once(char::is_whitespace) {
        Some((kind, payload)) => (kind, payload.trim()),
        None => (rhs, ""),
    };
    match kind {
        "definition" => Ok(CannedResult::Definition),
        "unclassified" => Ok(CannedResult::Unclassified),
        "error" => Ok(CannedResult::Failure(if payload.is_empty() {
            "statement failed".to_string()
        } else {
            payload.to_string()
        })),
        "modification" => {
            let affected = if payload.is_empty() {
                1
            } else {
                payload
                    .parse()
                    .map_err(|_| RuleError::new(line, "modification count must be an integer"))?
            };
            Ok(CannedResult::Modification(affected))
        }
        "scalar" => {
            if payload.is_empty() {
                return Err(RuleError::new(line, "scalar result needs a value"));
            }
            Ok(CannedResult::Scalar(payload.to_string()))
        }
        "table" => parse_table(payload, line),
        other => Err(RuleError::new(line, format!("unknown result kind `{}`", other))),
    }
}

fn parse_table(payload: &str, line: usize) -> Result<CannedResult, RuleError> {
    let mut segments = payload.split('|').map(str::trim);
    let header = segments
        .next()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| RuleError::new(line, "table result needs a column list"))?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    let mut rows = Vec::new();
    for segment in segments {
        let values: Vec<&str> = segment.split(',').map(str::trim).collect();
        if values.len() != columns.len() {
            return Err(RuleError::new(
                line,
                format!(
                    "table row has {} values but {} columns",
                    values.len(),
                    columns.len()
                ),
            ));
        }
        rows.push(Row::from_pairs(
            columns.iter().copied().zip(values.iter().copied()),
        ));
    }
    Ok(CannedResult::Tabular(rows))
}

/// One live scripted session.
pub struct ScriptedSession {
    ruleset: Rc<RuleSet>,
    log: Rc<RefCell<ResourceLog>>,
}

impl EngineSession for ScriptedSession {
    type Handle = ScriptedHandle;

    fn submit(&mut self, statement: &str) -> Result<Self::Handle, EngineError> {
        if let Some(message) = &self.ruleset.unavailable {
            return Err(EngineError::Unavailable(message.clone()));
        }

        let needle = statement.trim().to_uppercase();
        let result = self
            .ruleset
            .rules
            .iter()
            .find(|rule| needle.starts_with(&rule.prefix))
            .map(|rule| rule.result.clone())
            .unwrap_or_else(|| self.ruleset.default.clone());

        self.log.borrow_mut().handles_opened += 1;
        Ok(ScriptedHandle {
            result,
            log: Rc::clone(&self.log),
        })
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        self.log.borrow_mut().sessions_closed += 1;
    }
}

/// Handle over one canned result.
pub struct ScriptedHandle {
    result: CannedResult,
    log: Rc<RefCell<ResourceLog>>,
}

impl ResultHandle for ScriptedHandle {
    type Cursor = ScriptedCursor;

    fn succeeded(&self) -> bool {
        !matches!(self.result, CannedResult::Failure(_))
    }

    fn error_message(&self) -> Option<String> {
        match &self.result {
            CannedResult::Failure(message) => Some(message.clone()),
            _ => None,
        }
    }

    fn is_definition(&self) -> bool {
        matches!(self.result, CannedResult::Definition)
    }

    fn is_modification(&self) -> bool {
        matches!(self.result, CannedResult::Modification(_))
    }

    fn is_scalar(&self) -> bool {
        matches!(self.result, CannedResult::Scalar(_))
    }

    fn scalar_value(&self) -> Option<String> {
        match &self.result {
            CannedResult::Scalar(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn affected_count(&self) -> u64 {
        match self.result {
            CannedResult::Modification(affected) => affected,
            _ => 0,
        }
    }

    fn is_tabular(&self) -> bool {
        matches!(self.result, CannedResult::Tabular(_))
    }

    fn open_cursor(&mut self) -> Result<Self::Cursor, ProtocolError> {
        match &self.result {
            CannedResult::Tabular(rows) => {
                self.log.borrow_mut().cursors_opened += 1;
                Ok(ScriptedCursor {
                    rows: rows.iter().cloned().collect(),
                    log: Rc::clone(&self.log),
                })
            }
            _ => Err(ProtocolError::NotTabular),
        }
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        self.log.borrow_mut().handles_released += 1;
    }
}

/// Cursor over canned rows.
pub struct ScriptedCursor {
    rows: VecDeque<Row>,
    log: Rc<RefCell<ResourceLog>>,
}

impl RowCursor for ScriptedCursor {
    fn next_row(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }
}

impl Drop for ScriptedCursor {
    fn drop(&mut self) {
        self.log.borrow_mut().cursors_released += 1;
    }
}
