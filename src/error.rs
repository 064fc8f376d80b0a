use thiserror::Error;

/// Arithmetic errors.
///
/// Raised by the integer operations themselves while an expression is being
/// evaluated: division by zero and results that do not fit the integer type.
pub mod arithmetic_error;
/// Lexing errors.
///
/// Raised when the input contains a character outside the recognized
/// alphabet of digits, operators and spaces.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when a token appears where the grammar does not allow it, when the
/// token stream ends early, or when a number literal cannot be represented.
pub mod parse_error;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of a complete evaluation.
///
/// Each phase error is wrapped as-is, so the caller sees exactly what the
/// failing phase reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not follow the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An integer operation failed while evaluating.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
