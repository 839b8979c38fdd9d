//! RELQ terminal binary.
//!
//! The query engine is an external collaborator, so this binary drives the
//! harness against the scripted engine from `relq-engine`, with canned
//! results loaded from a rule file (`--fixture`). Embedders wire a real
//! engine through the `relq_repl` library API instead.

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::exit;

use relq_engine::scripted::ScriptedEngine;
use relq_repl::Repl;

fn print_usage() {
    println!("Usage: relq [--fixture <rules-file>] [script-file ...]");
    println!();
    println!("Executes script files in order, then reads further input from");
    println!("the terminal (or from stdin when piped). Without a fixture,");
    println!("every statement fails with the default rule.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut fixture: Option<String> = None;
    let mut scripts: Vec<String> = Vec::new();

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fixture" | "-f" => match iter.next() {
                Some(path) => fixture = Some(path.clone()),
                None => {
                    eprintln!("Error: --fixture requires a file path");
                    exit(2);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => scripts.push(arg.clone()),
        }
    }

    let engine = match &fixture {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    exit(1);
                }
            };
            match ScriptedEngine::from_rules(&text) {
                Ok(engine) => engine,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit(1);
                }
            }
        }
        None => ScriptedEngine::new(),
    };

    let mut repl = Repl::new(engine.open_session());

    for path in &scripts {
        if let Err(e) = repl.run_file(Path::new(path)) {
            eprintln!("Error loading {}: {}", path, e);
            exit(1);
        }
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        if let Err(e) = repl.interactive() {
            eprintln!("Error: {}", e);
            exit(1);
        }
    } else if scripts.is_empty() {
        // Only read from the stdin pipe if no files were passed
        let mut input = String::new();
        if let Err(e) = stdin.lock().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            exit(1);
        }
        if let Err(e) = repl.run_script(&input) {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }

    repl.close();
}
