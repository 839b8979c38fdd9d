//! Terminal state and script execution.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use relq_engine::EngineSession;
use relq_script::{ensure_terminated, split_script};
use relq_session::{NullSink, StatementExecutor, StatementOutcome};

use crate::format::{print_help, render_outcome, TextTable};
use crate::symbols::{check_assertion, AssertionOutcome, SymbolTable};

/// Number of inputs kept in the interactive history.
pub const HISTORY_SIZE: usize = 20;

/// Terminal state.
///
/// Owns the statement executor (and through it the engine session) for the
/// whole terminal run: one session, torn down once when the terminal
/// closes. Statement failures are rendered inline and never abort a batch;
/// only a session-level engine failure does.
pub struct Repl<S: EngineSession> {
    executor: StatementExecutor<S>,
    symbols: SymbolTable,
    history: VecDeque<String>,
    profiling: bool,
    last_count: u64,
}

impl<S: EngineSession> Repl<S> {
    /// Create a terminal over one engine session.
    pub fn new(session: S) -> Self {
        Self {
            executor: StatementExecutor::new(session),
            symbols: SymbolTable::new(),
            history: VecDeque::new(),
            profiling: false,
            last_count: 0,
        }
    }

    /// Execute one statement and return its rendered block.
    ///
    /// Protocol violations render as an error block (the statement is lost,
    /// the batch is not). `Err` is reserved for batch-fatal session
    /// failures.
    pub fn execute_statement(&mut self, statement: &str) -> Result<String, String> {
        let mut table = TextTable::new();
        match self.executor.execute(statement, &mut table) {
            Ok(outcome) => {
                self.last_count = outcome.tuple_count();
                Ok(render_outcome(&outcome, table))
            }
            Err(e) if e.is_fatal() => Err(e.to_string()),
            Err(e) => {
                self.last_count = 0;
                let outcome = StatementOutcome::Error {
                    statement: statement.to_string(),
                    message: e.to_string(),
                };
                Ok(render_outcome(&outcome, TextTable::new()))
            }
        }
    }

    /// Execute one statement in profiling mode: results are drained, not
    /// rendered, and a timing line comes back instead.
    pub fn profile_statement(&mut self, statement: &str) -> Result<String, String> {
        let start = Instant::now();
        let result = self.executor.execute(statement, &mut NullSink);
        let elapsed = start.elapsed();

        match result {
            Ok(outcome) => {
                self.last_count = outcome.tuple_count();
                let state = if outcome.is_error() {
                    "failed"
                } else {
                    "successful"
                };
                Ok(format!(
                    "Execution time: {:.6}s ({}, {} tuples affected)",
                    elapsed.as_secs_f64(),
                    state,
                    self.last_count
                ))
            }
            Err(e) if e.is_fatal() => Err(e.to_string()),
            Err(e) => {
                self.last_count = 0;
                Ok(format!(
                    "Execution time: {:.6}s (failed, 0 tuples affected)\n{}",
                    elapsed.as_secs_f64(),
                    e
                ))
            }
        }
    }

    /// Run a script: split it, execute every statement in order, print one
    /// block per statement.
    pub fn run_script(&mut self, raw: &str) -> Result<(), String> {
        for statement in split_script(raw) {
            let statement = statement.trim();
            println!("$ {}", statement);
            let block = if self.profiling {
                self.profile_statement(statement)?
            } else {
                self.execute_statement(statement)?
            };
            println!("{}", block);
        }
        Ok(())
    }

    /// Run a script file.
    pub fn run_file(&mut self, path: &Path) -> Result<(), String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

        println!("Loading: {}", path.display());

        self.run_script(&content)
    }

    /// Interpret one terminal input. Returns `Ok(false)` when the terminal
    /// should exit; `Err` is batch-fatal.
    pub fn interpret(&mut self, input: &str) -> Result<bool, String> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(true);
        }

        let lowered = line.to_lowercase();
        match lowered.as_str() {
            "exit" | "quit" => return Ok(false),
            "help" => {
                print_help();
                return Ok(true);
            }
            "profiling-on" => {
                self.profiling = true;
                return Ok(true);
            }
            "profiling-off" => {
                self.profiling = false;
                return Ok(true);
            }
            _ => {}
        }

        if let Some(name) = line.strip_prefix("store ") {
            if let Err(e) = self.symbols.store(name.trim(), self.last_count) {
                eprintln!("Error: {}", e);
            }
        } else if let Some(rest) = line.strip_prefix("count ") {
            self.count_rows(rest)?;
        } else if let Some(name) = line.strip_prefix("echo ") {
            let name = name.trim();
            match self.symbols.load(name) {
                Some(count) => println!("{} = {}", name, count),
                None => eprintln!("Unknown variable: {}", name),
            }
        } else if let Some(assertion) = line.strip_prefix("assert ") {
            match check_assertion(&self.symbols, assertion) {
                Ok(AssertionOutcome::Holds) => {}
                Ok(AssertionOutcome::Failed {
                    left,
                    relation,
                    right,
                }) => eprintln!("Assertion failed: {} {} {}", left, relation, right),
                Err(e) => eprintln!("Error: {}", e),
            }
        } else if let Some(path) = line.strip_prefix('@') {
            return self.run_batch_file(path.trim());
        } else if let Some(command) = line.strip_prefix('!') {
            match std::process::Command::new("sh").arg("-c").arg(command).status() {
                Ok(_) => {}
                Err(e) => eprintln!("Error: {}", e),
            }
        } else {
            self.run_script(line)?;
        }

        Ok(true)
    }

    /// `count V <stmt>`: execute a statement and store its row count.
    fn count_rows(&mut self, rest: &str) -> Result<(), String> {
        let Some((name, statement)) = rest.trim().split_once(char::is_whitespace) else {
            eprintln!("Error: count needs a variable name and a statement");
            return Ok(());
        };

        let statement = ensure_terminated(statement.trim());
        match self.executor.execute(&statement, &mut NullSink) {
            Ok(StatementOutcome::Tabular { rows }) => {
                self.last_count = rows;
                if let Err(e) = self.symbols.store(name, rows) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(e) if e.is_fatal() => return Err(e.to_string()),
            Ok(_) | Err(_) => {
                eprintln!(
                    "Statement could not be executed or was no query: {}",
                    statement
                );
            }
        }
        Ok(())
    }

    /// Record one interactive input, newest first, capped at [`HISTORY_SIZE`].
    fn record(&mut self, input: String) {
        self.history.push_front(input);
        self.history.truncate(HISTORY_SIZE);
    }

    /// Look up the n-th most recent input (1-based).
    fn recall(&self, n: usize) -> Option<&String> {
        if n == 0 {
            None
        } else {
            self.history.get(n - 1)
        }
    }

    /// Execute a batch file: one command per line, blank lines and `#`
    /// comments skipped, each command echoed behind the prompt.
    fn run_batch_file(&mut self, path: &str) -> Result<bool, String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(true);
            }
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            println!("$ {}", line);
            if !self.interpret(line)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Run the interactive terminal.
    pub fn interactive(&mut self) -> Result<(), String> {
        println!("RELQ terminal");
        println!("Type 'help' for commands, 'exit' to leave");
        println!();

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("$ ");
            stdout.flush().map_err(|e| e.to_string())?;

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break, // EOF
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    continue;
                }
            }
            let input = line.trim().to_string();

            // History commands are interactive-only and never recorded.
            if input == "##" {
                for i in (0..self.history.len()).rev() {
                    println!("  #{}\t{}", i + 1, self.history[i]);
                }
                continue;
            }
            if let Some(n) = input.strip_prefix('#').and_then(|s| s.parse::<usize>().ok()) {
                let Some(recalled) = self.recall(n).cloned() else {
                    eprintln!("Error: index out of range");
                    continue;
                };
                println!("$ {}", recalled);
                if !self.interpret(&recalled)? {
                    break;
                }
                continue;
            }

            if !self.interpret(&input)? {
                break;
            }

            if !input.is_empty() {
                self.record(input);
            }
        }

        println!("Bye.");
        Ok(())
    }

    /// Close the terminal, tearing the engine session down.
    pub fn close(self) {
        self.executor.close();
    }
}
