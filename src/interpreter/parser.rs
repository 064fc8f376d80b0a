/// Entry point of the grammar.
///
/// Holds the result type shared by all grammar levels and the top-level
/// `expression` rule, which maps empty input to zero.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-associative sum level (`+`, `-`) and product level
/// (`*`, `/`), folding values as operators are consumed.
pub mod binary;

/// Unary level.
///
/// Handles number literals and prefix negation.
pub mod unary;
