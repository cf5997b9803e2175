/// Parser state and the expression entry point.
///
/// Holds the cursor threaded through the grammar functions, the lookahead
/// type it produces, and the top-level rule that checks for empty and
/// leftover input.
pub mod core;

/// Prefix signs, number literals and parenthesized groups.
///
/// Implements the factor rule, the tightest binding level of the grammar.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the left-associative additive and multiplicative levels and
/// the arithmetic they perform, including the division by zero check.
pub mod binary;
