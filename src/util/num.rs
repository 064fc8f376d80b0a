use crate::error::ArithmeticError;

/// Shorthand for results of checked integer operations.
pub type ArithResult = Result<i64, ArithmeticError>;

const fn overflow(lhs: i64, op: char, rhs: i64) -> ArithmeticError {
    ArithmeticError::Overflow { lhs, op, rhs }
}

/// Adds two integers, failing on overflow.
///
/// ## Errors
/// Returns `ArithmeticError::Overflow` if the sum does not fit in an `i64`.
///
/// ## Example
/// ```
/// use intcalc::util::num::checked_add;
///
/// assert_eq!(checked_add(2, 3), Ok(5));
/// assert!(checked_add(i64::MAX, 1).is_err());
/// ```
pub const fn checked_add(lhs: i64, rhs: i64) -> ArithResult {
    match lhs.checked_add(rhs) {
        Some(value) => Ok(value),
        None => Err(overflow(lhs, '+', rhs)),
    }
}

/// Subtracts `rhs` from `lhs`, failing on overflow.
///
/// ## Errors
/// Returns `ArithmeticError::Overflow` if the difference does not fit.
pub const fn checked_sub(lhs: i64, rhs: i64) -> ArithResult {
    match lhs.checked_sub(rhs) {
        Some(value) => Ok(value),
        None => Err(overflow(lhs, '-', rhs)),
    }
}

/// Multiplies two integers, failing on overflow.
///
/// ## Errors
/// Returns `ArithmeticError::Overflow` if the product does not fit.
pub const fn checked_mul(lhs: i64, rhs: i64) -> ArithResult {
    match lhs.checked_mul(rhs) {
        Some(value) => Ok(value),
        None => Err(overflow(lhs, '*', rhs)),
    }
}

/// Divides `lhs` by `rhs`, truncating toward zero.
///
/// ## Errors
/// - `ArithmeticError::DivisionByZero` if `rhs` is zero.
/// - `ArithmeticError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use intcalc::{error::ArithmeticError, util::num::checked_div};
///
/// assert_eq!(checked_div(-7, 2), Ok(-3));
/// assert_eq!(checked_div(1, 0), Err(ArithmeticError::DivisionByZero));
/// ```
pub const fn checked_div(lhs: i64, rhs: i64) -> ArithResult {
    if rhs == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    match lhs.checked_div(rhs) {
        Some(value) => Ok(value),
        None => Err(overflow(lhs, '/', rhs)),
    }
}

/// Negates an integer, failing for `i64::MIN`.
///
/// ## Errors
/// Returns `ArithmeticError::Overflow` if the negation does not fit.
pub const fn checked_neg(value: i64) -> ArithResult {
    match value.checked_neg() {
        Some(value) => Ok(value),
        None => Err(overflow(0, '-', value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(checked_div(7, 2), Ok(3));
        assert_eq!(checked_div(-7, 2), Ok(-3));
        assert_eq!(checked_div(7, -2), Ok(-3));
    }

    #[test]
    fn division_by_zero_is_reported_before_overflow() {
        assert_eq!(checked_div(i64::MIN, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(checked_div(i64::MIN, -1),
                   Err(ArithmeticError::Overflow { lhs: i64::MIN,
                                                   op:  '/',
                                                   rhs: -1, }));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(checked_add(i64::MAX, 1).is_err());
        assert!(checked_sub(i64::MIN, 1).is_err());
        assert!(checked_mul(i64::MAX, 2).is_err());
        assert!(checked_neg(i64::MIN).is_err());
        assert_eq!(checked_neg(5), Ok(-5));
    }
}
