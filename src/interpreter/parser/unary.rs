use std::num::IntErrorKind;

use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        cursor::{MAX_NESTING, TokenCursor},
        lexer::TokenKind,
        parser::{binary::parse_product, core::ParseResult},
    },
    util::num::checked_neg,
};

/// Parses and evaluates a unary expression.
///
/// Supports a number literal or a prefix `-`.
///
/// Negation applies to a whole product, not to a single operand: `-2*3` is
/// `-(2*3)` and `-8/2/2` is `-(8/2/2)`. The negated product still stops at
/// `+` and `-`, so `-2-3` is `(-2)-3`.
///
/// Grammar:
/// ```text
///     unary := "-" product
///            | Number
/// ```
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the operand.
///
/// # Returns
/// The value of the literal, or the negated product.
///
/// # Errors
/// - `UnexpectedToken` if the token is neither `-` nor a number.
/// - `LiteralTooLarge` if the digits do not fit an `i64`.
/// - `NestingTooDeep` if more than [`MAX_NESTING`] negations are open at once.
/// - `ArithmeticError::Overflow` when negating `i64::MIN`.
pub fn parse_unary(cursor: &mut TokenCursor) -> ParseResult<i64> {
    trace!("unary at {}", cursor.position());
    let token = cursor.next()?;
    match token.kind() {
        TokenKind::Minus => {
            cursor.descend()?;
            let value = parse_product(cursor)?;
            cursor.ascend();
            Ok(checked_neg(value)?)
        },
        TokenKind::Number => {
            let parsed = token.text().parse::<i64>();
            match parsed {
                Ok(value) => Ok(value),
                Err(e) => {
                    let token = token.text().to_string();
                    let position = cursor.position();
                    Err(match e.kind() {
                            IntErrorKind::PosOverflow => {
                                ParseError::LiteralTooLarge { token, position }
                            },
                            _ => ParseError::InvalidLiteral { token, position },
                        }.into())
                },
            }
        },
        _ => {
            let token = token.text().to_string();
            Err(ParseError::UnexpectedToken { token,
                                              position: cursor.position() }.into())
        },
    }
}
