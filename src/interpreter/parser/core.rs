use log::trace;

use crate::{
    error::EvalError,
    interpreter::{cursor::TokenCursor, lexer::TokenKind, parser::binary::parse_sum},
};

/// Result of a grammar rule: the value of the parsed fragment.
pub type ParseResult<T> = Result<T, EvalError>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for parsing. Evaluation is fused with parsing, so
/// the value is produced as the tokens are consumed and no tree is built.
///
/// Grammar:
/// ```text
///     expression := EndOfInput
///                 | sum
/// ```
///
/// An expression that is empty evaluates to `0`.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token.
///
/// # Returns
/// The integer value of the expression.
///
/// # Example
/// ```
/// use intcalc::interpreter::{
///     cursor::TokenCursor,
///     lexer::{Token, TokenKind},
///     parser::core::parse_expression,
/// };
///
/// let mut cursor = TokenCursor::new(vec![Token::end_of_input()]);
/// assert_eq!(parse_expression(&mut cursor).unwrap(), 0);
///
/// let mut cursor = TokenCursor::new(vec![Token::new(TokenKind::Number, "6"),
///                                        Token::new(TokenKind::Star, "*"),
///                                        Token::new(TokenKind::Number, "7"),
///                                        Token::end_of_input()]);
/// assert_eq!(parse_expression(&mut cursor).unwrap(), 42);
/// ```
pub fn parse_expression(cursor: &mut TokenCursor) -> ParseResult<i64> {
    trace!("expression at {}", cursor.position());
    if cursor.next()?.kind() == TokenKind::EndOfInput {
        return Ok(0);
    }
    cursor.unread();
    parse_sum(cursor)
}
