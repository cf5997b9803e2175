use crate::error::ErrorCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant except [`ParseError::EmptyExpression`] carries the byte
/// offset into the source at which the problem was detected.
pub enum ParseError {
    /// Found a character that cannot start the expected token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// Input ended while a closing parenthesis `)` was still expected.
    UnclosedParenthesis {
        /// Byte offset of the matching opening `(`.
        offset: usize,
    },
    /// The right operand of a division evaluated to zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// Found extra input after a complete expression.
    TrailingInput {
        /// Byte offset of the first leftover token.
        offset: usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A numeric literal does not fit in a finite `f64`.
    LiteralTooLarge {
        /// Byte offset of the literal.
        offset: usize,
    },
    /// An operation on finite operands produced an infinite or undefined
    /// value.
    Overflow {
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Parentheses or unary signs are nested deeper than the evaluator allows.
    NestingTooDeep {
        /// Byte offset at which the limit was exceeded.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if it has one.
    ///
    /// # Example
    /// ```
    /// use bodmas::{evaluate, error::ParseError};
    ///
    /// let err = evaluate("2 3").unwrap_err();
    /// assert_eq!(err.offset(), Some(2));
    /// assert_eq!(ParseError::EmptyExpression.offset(), None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnclosedParenthesis { offset }
            | Self::DivisionByZero { offset }
            | Self::TrailingInput { offset }
            | Self::UnexpectedEndOfInput { offset }
            | Self::LiteralTooLarge { offset }
            | Self::Overflow { offset }
            | Self::NestingTooDeep { offset } => Some(*offset),
            Self::EmptyExpression => None,
        }
    }

    /// Classifies the error as a syntax or a semantic failure.
    ///
    /// Syntax errors describe malformed input; semantic errors describe input
    /// that is well formed but has no value.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero { .. } | Self::Overflow { .. } | Self::EmptyExpression => {
                ErrorCategory::Semantic
            },
            Self::UnexpectedCharacter { .. }
            | Self::UnclosedParenthesis { .. }
            | Self::TrailingInput { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::LiteralTooLarge { .. }
            | Self::NestingTooDeep { .. } => ErrorCategory::Syntax,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Unexpected character '{character}'.")
            },

            Self::UnclosedParenthesis { offset } => write!(f,
                                                           "Error at offset {offset}: Parenthesis opened here is never closed."),

            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },

            Self::TrailingInput { offset } => write!(f,
                                                     "Error at offset {offset}: Unexpected input after the end of the expression."),

            Self::EmptyExpression => write!(f, "Error: Empty expression."),

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },

            Self::LiteralTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Literal is too large.")
            },

            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Result is too large to represent."),

            Self::NestingTooDeep { offset } => {
                write!(f, "Error at offset {offset}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
