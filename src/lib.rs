//! # intcalc
//!
//! intcalc evaluates integer arithmetic expressions written with `+`, `-`,
//! `*`, `/`, unary minus and spaces. It tokenizes the input and then evaluates
//! it with a recursive-descent parser in a single pass, without building a
//! syntax tree.
//!
//! `*` and `/` bind tighter than `+` and `-`, and every level is
//! left-associative. Unary minus negates a whole product: `-2*3` is `-(2*3)`.
//! Parentheses are not part of the language.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{
    cursor::TokenCursor,
    lexer::{Token, tokenize},
    parser::core::parse_expression,
};
pub use crate::error::{ArithmeticError, EvalError, LexError, ParseError};

/// Provides unified error types for lexing, parsing and arithmetic.
///
/// This module defines every error an evaluation can end with. Each error
/// carries enough detail to tell the user what went wrong and where.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (lexer, parser, arithmetic).
/// - Attaches the offending character or token and its position.
/// - Wraps all of them in a single error type for the public API.
pub mod error;
/// Orchestrates tokenizing and evaluating expressions.
///
/// # Responsibilities
/// - Converts text into tokens.
/// - Walks the tokens with a cursor and evaluates them per the grammar.
pub mod interpreter;
/// General utilities for checked integer arithmetic.
pub mod util;

/// Evaluates an expression and returns its integer value.
///
/// Empty input, or input consisting only of spaces, evaluates to `0`.
///
/// # Errors
/// - `EvalError::Lex` if the text contains a character other than a digit,
///   `+ - * /` or a space.
/// - `EvalError::Parse` if the tokens do not form a valid expression.
/// - `EvalError::Arithmetic` on division by zero or integer overflow.
///
/// # Examples
/// ```
/// use intcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5);
/// assert_eq!(evaluate("").unwrap(), 0);
///
/// // Division by zero is an error, never a value.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvalError> {
    let tokens = tokenize(source)?;
    let value = evaluate_tokens(tokens)?;
    debug!("{source:?} = {value}");
    Ok(value)
}

/// Evaluates an already tokenized expression.
///
/// The sequence should end with an `EndOfInput` token, as produced by
/// [`tokenize`]. A sequence without one fails with
/// `ParseError::UnexpectedEndOfInput` once the parser runs past its end.
///
/// # Errors
/// - `EvalError::Parse` if the tokens do not form a valid expression.
/// - `EvalError::Arithmetic` on division by zero or integer overflow.
///
/// # Examples
/// ```
/// use intcalc::{
///     evaluate_tokens,
///     interpreter::lexer::{Token, TokenKind},
/// };
///
/// let tokens = vec![Token::new(TokenKind::Minus, "-"),
///                   Token::new(TokenKind::Number, "2"),
///                   Token::new(TokenKind::Star, "*"),
///                   Token::new(TokenKind::Number, "3"),
///                   Token::end_of_input()];
/// assert_eq!(evaluate_tokens(tokens).unwrap(), -6);
/// ```
pub fn evaluate_tokens(tokens: Vec<Token>) -> Result<i64, EvalError> {
    let mut cursor = TokenCursor::new(tokens);
    parse_expression(&mut cursor)
}
