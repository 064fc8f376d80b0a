use thiserror::Error;

/// Represents all errors that can occur while parsing a token stream.
///
/// Every variant carries the cursor position at the moment of failure, which
/// is the index just past the token that was read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token where the grammar does not allow it.
    #[error("Unexpected token: '{token}' at position: {position}.")]
    UnexpectedToken {
        /// The text of the token encountered. Empty for the end of input.
        token:    String,
        /// The cursor position after reading the token.
        position: usize,
    },
    /// The token stream ran out without an end-of-input marker.
    #[error("Unexpected end of input at position: {position}.")]
    UnexpectedEndOfInput {
        /// The cursor position that could not be read.
        position: usize,
    },
    /// A number literal does not fit the integer type.
    #[error("Literal '{token}' is too large at position: {position}.")]
    LiteralTooLarge {
        /// The digits of the literal.
        token:    String,
        /// The cursor position after reading the literal.
        position: usize,
    },
    /// Negations are nested deeper than the parser allows.
    #[error("Expression is nested too deeply at position: {position}.")]
    NestingTooDeep {
        /// The cursor position after reading the token that went too deep.
        position: usize,
    },
    /// A number token whose text is not a decimal integer.
    #[error("Invalid number literal: '{token}' at position: {position}.")]
    InvalidLiteral {
        /// The text of the token.
        token:    String,
        /// The cursor position after reading the literal.
        position: usize,
    },
}
