use thiserror::Error;

/// Represents failures of the integer operations themselves.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The result of an operation does not fit the integer type.
    #[error("Integer overflow while trying to compute {lhs} {op} {rhs}.")]
    Overflow {
        /// Left operand. For negation this is zero.
        lhs: i64,
        /// The operator symbol.
        op:  char,
        /// Right operand.
        rhs: i64,
    },
}
