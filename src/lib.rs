//! # bodmas
//!
//! bodmas is a recursive-descent arithmetic evaluator written in Rust.
//! It evaluates expressions made of decimal numbers, `+ - * /`, unary signs
//! and parentheses, honoring operator precedence and left associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::parse_source};

/// Runs the built-in self-check table.
///
/// This module holds a fixed set of expressions with known values and the
/// machinery to evaluate them and summarize the outcome.
///
/// # Responsibilities
/// - Defines the regression cases shipped with the evaluator.
/// - Compares computed values with a fixed tolerance.
/// - Formats per-case outcomes for display.
pub mod check;
/// Provides the error type returned by evaluation.
///
/// This module defines every failure the evaluator can report, each tagged
/// with the byte offset at which it was detected, and renders them for
/// humans.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Classifies errors as syntax or semantic failures.
/// - Renders errors with the offending source line and a caret.
pub mod error;
/// Recognizes tokens and evaluates expressions.
///
/// This module ties together the on-demand lexer and the recursive-descent
/// grammar functions that compute values while parsing.
///
/// # Responsibilities
/// - Recognizes tokens at the cursor position.
/// - Implements the expression, term and factor rules.
/// - Threads an explicit, call-local cursor through every rule.
pub mod interpreter;
/// General utilities for presenting numeric results.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// The whole input must form one expression; whitespace between tokens and
/// at either end is ignored. Every call is independent: no state is shared
/// between evaluations, so the same input always produces the same result or
/// the same error.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found, tagged with
/// the byte offset where it occurred.
///
/// # Examples
/// ```
/// use bodmas::{error::ParseError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("-5 + 3 * 2"), Ok(1.0));
///
/// assert_eq!(evaluate("1 / 0"), Err(ParseError::DivisionByZero { offset: 2 }));
/// assert_eq!(evaluate("(2 + 3"), Err(ParseError::UnclosedParenthesis { offset: 0 }));
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    let result = parse_source(source);
    trace!(source, ?result, "evaluated expression");
    result
}
