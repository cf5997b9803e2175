//! Interactive calculator prompt.
//!
//! Reads one expression per line, prints its value or a diagnostic, and
//! keeps going until an exit command or end of input. Evaluation errors never
//! end the session.

use bodmas::{error::render, evaluate, util::num::format_value};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, error};

/// Prompt shown before every line.
const PROMPT: &str = "calc> ";

/// Lines that end the session.
const EXIT_COMMANDS: &[&str] = &["quit", "exit", ":q"];

/// What the prompt should do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    /// Nothing to evaluate.
    Skip,
    /// End the session.
    Exit,
    /// Evaluate the trimmed line.
    Evaluate(&'a str),
}

/// Classifies a raw input line.
fn classify(line: &str) -> Action<'_> {
    let line = line.trim();
    if line.is_empty() {
        Action::Skip
    } else if EXIT_COMMANDS.contains(&line) {
        Action::Exit
    } else {
        Action::Evaluate(line)
    }
}

/// Formats the response to an evaluated line.
///
/// Returns the text and whether it describes an error.
fn respond(source: &str, precision: Option<usize>) -> (String, bool) {
    match evaluate(source) {
        Ok(value) => (format!("Result: {}", format_value(value, precision)), false),
        Err(e) => (render(&e, source), true),
    }
}

/// Runs the prompt until the user exits.
///
/// # Errors
/// Returns the underlying [`ReadlineError`] if the terminal cannot be read.
pub fn run(precision: Option<usize>) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    println!("BODMAS calculator");
    println!("Supports: +, -, *, /, parentheses and decimal numbers");
    println!("Enter 'quit' to exit\n");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => match classify(&line) {
                Action::Skip => {},
                Action::Exit => {
                    println!("Goodbye!");
                    break;
                },
                Action::Evaluate(source) => {
                    let _ = rl.add_history_entry(source);
                    let (text, failed) = respond(source, precision);
                    if failed {
                        debug!(source, "evaluation failed");
                        eprintln!("{text}");
                    } else {
                        println!("{text}");
                    }
                },
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C drops the current line only
                println!();
            },
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            },
            Err(e) => {
                error!(error = %e, "failed to read input");
                return Err(e);
            },
        }
    }

    Ok(())
}
