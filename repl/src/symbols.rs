//! Tuple-count symbols.
//!
//! The terminal can store the tuple count of a statement under a named
//! symbol, echo it back, and check assertions over stored counts. Operands
//! in expressions are unsigned integers: literals, symbol names, or a
//! single binary `+ - * /` combination of the two.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Symbol names are identifier-shaped.
fn name_pattern() -> &'static regex_lite::Regex {
    static PATTERN: OnceLock<regex_lite::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex_lite::Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("symbol name pattern is valid")
    })
}

/// Named tuple counts stored by the terminal.
#[derive(Debug, Default)]
pub struct SymbolTable {
    counts: HashMap<String, u64>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `count` under `name`, replacing any previous value.
    pub fn store(&mut self, name: &str, count: u64) -> Result<(), String> {
        if !name_pattern().is_match(name) {
            return Err(format!("Invalid variable name: {}", name));
        }
        self.counts.insert(name.to_string(), count);
        Ok(())
    }

    /// Look up a stored count.
    pub fn load(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }
}

/// Evaluate an operand expression: a literal, a symbol, or exactly one
/// binary `+ - * /` over those.
pub fn eval_expr(symbols: &SymbolTable, expr: &str) -> Result<u64, String> {
    if let Some(idx) = expr.find(['+', '-', '*', '/']) {
        let operator = expr.as_bytes()[idx] as char;
        let left = eval_operand(symbols, &expr[..idx])?;
        let right = eval_operand(symbols, &expr[idx + 1..])?;
        apply_operator(left, operator, right)
    } else {
        eval_operand(symbols, expr)
    }
}

fn eval_operand(symbols: &SymbolTable, operand: &str) -> Result<u64, String> {
    let operand = operand.trim();
    if operand.chars().all(|c| c.is_ascii_digit()) && !operand.is_empty() {
        operand
            .parse()
            .map_err(|_| format!("Invalid number: {}", operand))
    } else {
        symbols
            .load(operand)
            .ok_or_else(|| format!("Unknown variable or expression: {}", operand))
    }
}

fn apply_operator(left: u64, operator: char, right: u64) -> Result<u64, String> {
    let result = match operator {
        '+' => left.checked_add(right),
        '-' => left.checked_sub(right),
        '*' => left.checked_mul(right),
        '/' => left.checked_div(right),
        _ => None,
    };
    result.ok_or_else(|| format!("Cannot evaluate: {} {} {}", left, operator, right))
}

/// Result of checking an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionOutcome {
    /// The relation holds.
    Holds,
    /// The relation does not hold; operands carry their evaluated values.
    Failed {
        left: u64,
        relation: String,
        right: u64,
    },
}

/// Check an assertion of the form `<left> <relation> <right>`.
///
/// Relations: `=`, `==`, `!=`, `<`, `<=`, `>`, `>=`. Operands are
/// expressions as in [`eval_expr`].
pub fn check_assertion(symbols: &SymbolTable, assertion: &str) -> Result<AssertionOutcome, String> {
    let parts: Vec<&str> = assertion.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("Wrong format of assertion.".to_string());
    }

    let left = eval_expr(symbols, parts[0])?;
    let relation = parts[1];
    let right = eval_expr(symbols, parts[2])?;

    let holds = match relation {
        "=" | "==" => left == right,
        "!=" => left != right,
        "<" => left < right,
        "<=" => left <= right,
        ">" => left > right,
        ">=" => left >= right,
        _ => return Err(format!("Unknown relation: {}", relation)),
    };

    if holds {
        Ok(AssertionOutcome::Holds)
    } else {
        Ok(AssertionOutcome::Failed {
            left,
            relation: relation.to_string(),
            right,
        })
    }
}
