/// Numeric formatting helpers.
///
/// This module turns evaluation results into the text shown to users, either
/// with the shortest representation that round-trips or with a fixed number
/// of fractional digits.
pub mod num;
