use crate::error::ParseError;

/// Renders an error as a multi-line report pointing into `source`.
///
/// The first line is the error message. When the error carries an offset,
/// the source line containing it follows, indented by two spaces, and a caret
/// marks the column of the offset. Offsets past the end of the source point
/// just after the last character.
///
/// # Parameters
/// - `error`: The error to render.
/// - `source`: The text that was evaluated.
///
/// # Returns
/// The rendered report, without a trailing newline.
///
/// # Example
/// ```
/// use bodmas::{error::render, evaluate};
///
/// let source = "2 + )";
/// let err = evaluate(source).unwrap_err();
/// assert_eq!(render(&err, source),
///            "Error at offset 4: Unexpected character ')'.\n  2 + )\n      ^");
/// ```
#[must_use]
pub fn render(error: &ParseError, source: &str) -> String {
    let Some(offset) = error.offset() else {
        return error.to_string();
    };

    let offset = clamp_to_char_boundary(source, offset);
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let line = source[line_start..line_end].trim_end_matches('\r');
    let column = source[line_start..offset].chars().count();

    format!("{error}\n  {line}\n  {}^", " ".repeat(column))
}

/// Moves `offset` back onto the nearest char boundary inside `source`.
fn clamp_to_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
