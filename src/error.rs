/// Evaluation errors.
///
/// Defines the error type returned by [`crate::evaluate`]. Errors cover
/// syntax mistakes, such as unexpected characters or unclosed parentheses,
/// and semantic failures such as division by zero.
pub mod parse_error;
/// Human readable error reports.
///
/// Renders an error together with the offending source line and a caret
/// under the reported offset, for use by command line front ends.
pub mod report;

pub use parse_error::ParseError;
pub use report::render;

/// Broad classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input is not a well formed expression.
    Syntax,
    /// The input is well formed but has no value.
    Semantic,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax error"),
            Self::Semantic => write!(f, "semantic error"),
        }
    }
}
