use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Tokens are never collected into a list; the parser recognizes them one at
/// a time from its cursor position. A sign is never part of a number literal,
/// it is always lexed as [`Token::Plus`] or [`Token::Minus`] and applied by
/// the unary rule of the grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A fractional part requires digits on both sides of the point, so `.5`
    /// and `5.` do not lex as numbers.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// Digit runs too long for an `f64` parse to infinity rather than failing;
/// the parser rejects non-finite literals with a positioned error.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
