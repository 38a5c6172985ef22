/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// binding lists, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, mixed-type operands, empty-list access, heterogeneous
/// containers, and division by zero.
pub mod runtime_error;
/// The top-level error type.
///
/// Wraps either the full list of syntax diagnostics a parse produced or the
/// runtime error that halted evaluation.
pub mod let_error;

pub use let_error::LetError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
