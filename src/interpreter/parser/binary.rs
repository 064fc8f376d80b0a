use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        lexer::TokenKind,
        parser::{core::ParseResult, unary::parse_unary},
    },
    util::num::{checked_add, checked_div, checked_mul, checked_sub},
};

/// Parses and evaluates addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`. Each operand is a
/// product, so `*` and `/` bind tighter.
///
/// The rule is: `sum := product (("+" | "-") product)*`
///
/// The end-of-input token stops the fold and is pushed back so the caller can
/// observe it.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the sum.
///
/// # Returns
/// The folded value, computed left to right.
///
/// # Errors
/// - `UnexpectedToken` for any token other than `+`, `-` or the end marker
///   after an operand.
/// - `ArithmeticError::Overflow` if an intermediate value does not fit.
pub fn parse_sum(cursor: &mut TokenCursor) -> ParseResult<i64> {
    trace!("sum at {}", cursor.position());
    let mut value = parse_product(cursor)?;
    loop {
        let token = cursor.next()?;
        match token.kind() {
            TokenKind::Plus => value = checked_add(value, parse_product(cursor)?)?,
            TokenKind::Minus => value = checked_sub(value, parse_product(cursor)?)?,
            TokenKind::EndOfInput => {
                cursor.unread();
                return Ok(value);
            },
            _ => {
                let token = token.text().to_string();
                return Err(ParseError::UnexpectedToken { token,
                                                         position: cursor.position() }.into());
            },
        }
    }
}

/// Parses and evaluates multiplication and division.
///
/// Handles left-associative operators `*` and `/`. Division truncates toward
/// zero.
///
/// The rule is: `product := unary (("*" | "/") unary)*`
///
/// A `+`, `-` or end-of-input token stops the fold and is pushed back for the
/// enclosing sum.
///
/// # Parameters
/// - `cursor`: Cursor positioned at the first token of the product.
///
/// # Returns
/// The folded value, computed left to right.
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot follow an operand, such as a
///   second number.
/// - `ArithmeticError::DivisionByZero` if a divisor evaluates to zero.
/// - `ArithmeticError::Overflow` if an intermediate value does not fit.
pub fn parse_product(cursor: &mut TokenCursor) -> ParseResult<i64> {
    trace!("product at {}", cursor.position());
    let mut value = parse_unary(cursor)?;
    loop {
        let token = cursor.next()?;
        match token.kind() {
            TokenKind::Star => value = checked_mul(value, parse_unary(cursor)?)?,
            TokenKind::Slash => value = checked_div(value, parse_unary(cursor)?)?,
            TokenKind::Plus | TokenKind::Minus | TokenKind::EndOfInput => {
                cursor.unread();
                return Ok(value);
            },
            TokenKind::Number => {
                let token = token.text().to_string();
                return Err(ParseError::UnexpectedToken { token,
                                                         position: cursor.position() }.into());
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ArithmeticError, interpreter::lexer::Token};

    fn cursor(tokens: &[(TokenKind, &str)]) -> TokenCursor {
        let mut tokens: Vec<Token> =
            tokens.iter().map(|&(kind, text)| Token::new(kind, text)).collect();
        tokens.push(Token::end_of_input());
        TokenCursor::new(tokens)
    }

    #[test]
    fn product_stops_at_additive_operator() {
        use TokenKind::{Number, Plus, Star};

        let mut cursor = cursor(&[(Number, "2"), (Star, "*"), (Number, "3"), (Plus, "+"), (Number, "4")]);
        assert_eq!(parse_product(&mut cursor), Ok(6));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.next().unwrap().kind(), Plus);
    }

    #[test]
    fn sum_folds_left_to_right() {
        use TokenKind::{Minus, Number, Plus};

        let mut cursor = cursor(&[(Number, "1"), (Minus, "-"), (Number, "2"), (Plus, "+"), (Number, "3")]);
        assert_eq!(parse_sum(&mut cursor), Ok(2));
    }

    #[test]
    fn product_folds_left_to_right() {
        use TokenKind::{Number, Slash, Star};

        let mut cursor = cursor(&[(Number, "7"), (Slash, "/"), (Number, "2"), (Star, "*"), (Number, "2")]);
        assert_eq!(parse_product(&mut cursor), Ok(6));
    }

    #[test]
    fn division_truncates_toward_zero() {
        use TokenKind::{Minus, Number, Slash};

        let mut cursor = cursor(&[(Minus, "-"), (Number, "7"), (Slash, "/"), (Number, "2")]);
        assert_eq!(parse_sum(&mut cursor), Ok(-3));
    }

    #[test]
    fn adjacent_numbers_are_rejected() {
        use TokenKind::Number;

        let mut cursor = cursor(&[(Number, "3"), (Number, "4")]);
        assert_eq!(parse_sum(&mut cursor),
                   Err(ParseError::UnexpectedToken { token:    "4".to_string(),
                                                     position: 2, }.into()));
    }

    #[test]
    fn missing_right_operand_is_rejected() {
        use TokenKind::{Number, Plus};

        let mut cursor = cursor(&[(Number, "3"), (Plus, "+")]);
        assert_eq!(parse_sum(&mut cursor),
                   Err(ParseError::UnexpectedToken { token:    String::new(),
                                                     position: 3, }.into()));
    }

    #[test]
    fn overflow_is_reported() {
        use TokenKind::{Number, Star};

        let max = i64::MAX.to_string();
        let mut cursor = cursor(&[(Number, max.as_str()), (Star, "*"), (Number, "2")]);
        assert_eq!(parse_product(&mut cursor),
                   Err(ArithmeticError::Overflow { lhs: i64::MAX,
                                                   op:  '*',
                                                   rhs: 2, }.into()));
    }

    #[test]
    fn zero_divisor_from_subexpression() {
        use TokenKind::{Minus, Number, Slash, Star};

        let mut cursor = cursor(&[(Number, "8"), (Slash, "/"), (Minus, "-"), (Number, "0"), (Star, "*"), (Number, "3")]);
        assert_eq!(parse_product(&mut cursor), Err(ArithmeticError::DivisionByZero.into()));
    }
}
