use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Lookahead, ParseResult, ParserState},
            unary::parse_factor,
        },
    },
};

/// Binary arithmetic operators, grouped by precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the lowest precedence level, `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the higher precedence level, `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that cannot continue a binary expression.
///
/// # Example
/// ```
/// use bodmas::interpreter::{
///     lexer::Token,
///     parser::binary::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators `+` and `-`, folding each
/// operand into the running value as soon as it is parsed, so `8 - 3 - 2`
/// evaluates as `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `state`: Cursor positioned at the first operand.
///
/// # Returns
/// The value of the additive expression.
pub fn parse_additive(state: &mut ParserState<'_>) -> ParseResult<f64> {
    let mut left = parse_multiplicative(state)?;
    loop {
        if let (Lookahead::Token(token), offset) = state.peek()
           && let Some(op) = token_to_binary_operator(&token)
           && op.is_additive()
        {
            state.advance();
            let right = parse_multiplicative(state)?;
            left = apply_binary_operator(op, left, right, offset)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`, so `20 / 4 / 2`
/// evaluates as `(20 / 4) / 2`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `state`: Cursor positioned at the first operand.
///
/// # Returns
/// The value of the multiplicative expression.
///
/// # Errors
/// Returns `DivisionByZero` at the offset of the `/` when a divisor is zero.
pub fn parse_multiplicative(state: &mut ParserState<'_>) -> ParseResult<f64> {
    let mut left = parse_factor(state)?;
    loop {
        if let (Lookahead::Token(token), offset) = state.peek()
           && let Some(op) = token_to_binary_operator(&token)
           && op.is_multiplicative()
        {
            state.advance();
            let right = parse_factor(state)?;
            left = apply_binary_operator(op, left, right, offset)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Applies a binary operator to two evaluated operands.
///
/// A zero divisor, including `-0.0`, fails the whole expression instead of
/// producing an infinity or leaving the dividend unchanged. A result that is
/// not finite fails with `Overflow`, so no evaluation ever yields an infinity
/// or NaN.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the operator, for error reporting.
///
/// # Example
/// ```
/// use bodmas::{
///     error::ParseError,
///     interpreter::parser::binary::{BinaryOperator, apply_binary_operator},
/// };
///
/// assert_eq!(apply_binary_operator(BinaryOperator::Div, 9.0, 2.0, 0), Ok(4.5));
/// assert_eq!(apply_binary_operator(BinaryOperator::Div, 9.0, 0.0, 7),
///            Err(ParseError::DivisionByZero { offset: 7 }));
/// assert_eq!(apply_binary_operator(BinaryOperator::Mul, f64::MAX, 2.0, 3),
///            Err(ParseError::Overflow { offset: 3 }));
/// ```
#[allow(clippy::float_cmp)]
pub fn apply_binary_operator(op: BinaryOperator,
                             left: f64,
                             right: f64,
                             offset: usize)
                             -> ParseResult<f64> {
    let result = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(ParseError::DivisionByZero { offset });
            }
            left / right
        },
    };

    if !result.is_finite() {
        return Err(ParseError::Overflow { offset });
    }
    Ok(result)
}
