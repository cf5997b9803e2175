use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Lookahead, ParseResult, ParserState, parse_expression},
    },
};

/// Parses a factor: a signed operand.
///
/// Supports the prefix operators `-` (negation) and `+` (identity). Signs
/// recurse into this rule, so they bind tighter than any binary operator and
/// stack to any depth: `--5` is `5` and `-+-5` is `5`.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | primary
/// ```
/// # Parameters
/// - `state`: Cursor positioned at the start of the factor.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// Returns `NestingTooDeep` when signs and parentheses are nested past
/// [`crate::interpreter::parser::core::MAX_NESTING_DEPTH`], and propagates
/// any error from the operand.
pub fn parse_factor(state: &mut ParserState<'_>) -> ParseResult<f64> {
    let (lookahead, offset) = state.peek();
    state.descend(offset)?;

    let result = match lookahead {
        Lookahead::Token(Token::Minus) => {
            state.advance();
            parse_factor(state).map(|value| -value)
        },
        Lookahead::Token(Token::Plus) => {
            state.advance();
            parse_factor(state)
        },
        _ => parse_primary(state),
    };

    state.ascend();
    result
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are number literals and parenthesized expressions.
/// This function does not handle signs.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `state`: Cursor positioned at the start of a primary expression.
///
/// # Returns
/// The value of the primary expression.
///
/// # Errors
/// - `UnexpectedCharacter` if the cursor is on anything else, including an
///   operator or a stray `.`.
/// - `UnexpectedEndOfInput` if the input ends where an operand is required.
pub fn parse_primary(state: &mut ParserState<'_>) -> ParseResult<f64> {
    match state.peek() {
        (Lookahead::Token(Token::Number(value)), offset) => parse_number(state, value, offset),
        (Lookahead::Token(Token::LParen), offset) => parse_grouping(state, offset),
        (Lookahead::Token(_), offset) => Err(state.unexpected_at(offset)),
        (Lookahead::Invalid(character), offset) => {
            Err(ParseError::UnexpectedCharacter { character, offset })
        },
        (Lookahead::End, offset) => Err(ParseError::UnexpectedEndOfInput { offset }),
    }
}

/// Consumes a number literal.
///
/// # Parameters
/// - `state`: Cursor positioned at the literal.
/// - `value`: The value recognized by the lexer.
/// - `offset`: Byte offset of the literal.
///
/// # Errors
/// Returns `LiteralTooLarge` if the literal is not a finite `f64`.
fn parse_number(state: &mut ParserState<'_>, value: f64, offset: usize) -> ParseResult<f64> {
    if !value.is_finite() {
        return Err(ParseError::LiteralTooLarge { offset });
    }
    state.advance();
    Ok(value)
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `state`: Cursor positioned at `(`.
/// - `open`: Byte offset of the `(`.
///
/// # Returns
/// The value of the inner expression.
///
/// # Errors
/// - `UnclosedParenthesis` at the offset of `(` if the input ends before the
///   matching `)`.
/// - `UnexpectedCharacter` if another token sits where `)` is required.
fn parse_grouping(state: &mut ParserState<'_>, open: usize) -> ParseResult<f64> {
    state.advance();
    let value = parse_expression(state)?;

    match state.peek() {
        (Lookahead::Token(Token::RParen), _) => {
            state.advance();
            Ok(value)
        },
        (Lookahead::End, _) => Err(ParseError::UnclosedParenthesis { offset: open }),
        (_, offset) => Err(state.unexpected_at(offset)),
    }
}
