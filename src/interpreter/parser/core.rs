use logos::{Lexer, Logos};

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and unary signs accepted by the parser.
///
/// Every level costs a handful of stack frames, so the limit keeps hostile
/// input from overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// What the cursor sees at its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookahead {
    /// A recognized token.
    Token(Token),
    /// The input is exhausted.
    End,
    /// A character that does not start any token.
    Invalid(char),
}

/// Cursor over the source text of a single evaluation.
///
/// The state is created by [`crate::evaluate`] and threaded by mutable
/// reference through the grammar functions. Peeking never moves the cursor;
/// only [`ParserState::advance`] does, so the offset never decreases and
/// never exceeds the source length.
pub struct ParserState<'src> {
    lexer: Lexer<'src, Token>,
    depth: usize,
}

impl<'src> ParserState<'src> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source),
               depth: 0, }
    }

    /// Returns the full source text.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Returns the byte offset just past the last consumed token.
    ///
    /// # Example
    /// ```
    /// use bodmas::interpreter::parser::core::ParserState;
    ///
    /// let mut state = ParserState::new("12 + 3");
    /// assert_eq!(state.offset(), 0);
    /// state.advance();
    /// assert_eq!(state.offset(), 2);
    /// ```
    #[must_use]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    /// Recognizes the token at the cursor without consuming it.
    ///
    /// Whitespace before the token is skipped, so trailing whitespace reads
    /// as [`Lookahead::End`].
    ///
    /// # Returns
    /// The lookahead together with the byte offset where it starts.
    #[must_use]
    pub fn peek(&self) -> (Lookahead, usize) {
        let mut ahead = self.lexer.clone();
        match ahead.next() {
            Some(Ok(token)) => (Lookahead::Token(token), ahead.span().start),
            Some(Err(())) => {
                let offset = ahead.span().start;
                (Lookahead::Invalid(self.char_at(offset)), offset)
            },
            None => (Lookahead::End, self.source().len()),
        }
    }

    /// Consumes the token at the cursor.
    ///
    /// Calling this at the end of input leaves the cursor unchanged.
    pub fn advance(&mut self) {
        self.lexer.next();
    }

    /// Returns the character starting at `offset`.
    ///
    /// Offsets outside the source, or inside a multi-byte character, yield
    /// `char::REPLACEMENT_CHARACTER`.
    #[must_use]
    pub fn char_at(&self, offset: usize) -> char {
        self.source()
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Builds an `UnexpectedCharacter` error for the token at `offset`.
    #[must_use]
    pub fn unexpected_at(&self, offset: usize) -> ParseError {
        ParseError::UnexpectedCharacter { character: self.char_at(offset),
                                          offset }
    }

    /// Enters one level of nesting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once more than [`MAX_NESTING_DEPTH`] levels
    /// are open.
    pub(in crate::interpreter::parser) fn descend(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { offset });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub(in crate::interpreter::parser) const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses and evaluates a full expression.
///
/// This is the entry point of the grammar. It starts at the lowest
/// precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// The cursor is left on the first token that does not continue the
/// expression; checking for leftover input is the caller's job.
///
/// # Parameters
/// - `state`: Cursor positioned at the start of the expression.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(state: &mut ParserState<'_>) -> ParseResult<f64> {
    parse_additive(state)
}

/// Evaluates `source` as one complete expression.
///
/// Input made only of whitespace is an `EmptyExpression`; any token left
/// over after the expression is `TrailingInput`.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse_source(source: &str) -> ParseResult<f64> {
    let mut state = ParserState::new(source);

    if let (Lookahead::End, _) = state.peek() {
        return Err(ParseError::EmptyExpression);
    }

    let value = parse_expression(&mut state)?;

    match state.peek() {
        (Lookahead::End, _) => Ok(value),
        (_, offset) => Err(ParseError::TrailingInput { offset }),
    }
}
