/// Checked integer arithmetic.
///
/// Every arithmetic step of an evaluation goes through these helpers so that
/// overflow and division by zero surface as `ArithmeticError` values instead
/// of wrapping or panicking.
pub mod num;
