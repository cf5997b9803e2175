/// The lexer module recognizes tokens in the source text.
///
/// Tokens are numbers, the four arithmetic operators and parentheses.
/// Whitespace is skipped. Recognition happens on demand, one token at a time,
/// from the parser's cursor.
///
/// # Responsibilities
/// - Converts characters at the cursor into a token with a source span.
/// - Parses number literals into `f64`.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module evaluates expressions while it parses them.
///
/// The parser is a recursive descent over the classic three-level grammar
/// (expression, term, factor). Each rule computes its value directly; no
/// syntax tree is built.
///
/// # Responsibilities
/// - Encodes operator precedence and left associativity.
/// - Handles unary signs and parenthesized sub-expressions.
/// - Reports positioned errors instead of printing them.
pub mod parser;
