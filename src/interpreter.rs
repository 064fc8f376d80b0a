/// The cursor module provides positional reading over a token sequence.
///
/// The parser consumes tokens one at a time through a cursor and pushes a
/// single token back whenever a grammar level needs to leave its terminator
/// for the enclosing level.
///
/// # Responsibilities
/// - Owns the token sequence produced by the lexer.
/// - Tracks the read position and supports one token of pushback.
pub mod cursor;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// numbers, the four arithmetic operators, and a final end-of-input marker.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into typed tokens, skipping spaces.
/// - Reports lexical errors with the offending character and its position.
pub mod lexer;
/// The parser module evaluates a token sequence.
///
/// Each grammar level is a function that consumes tokens and returns the
/// integer value of what it consumed. Parsing and evaluation happen in the
/// same pass.
///
/// # Responsibilities
/// - Implements the sum, product and unary levels of the grammar.
/// - Validates the token order, reporting the offending token and position.
/// - Performs checked integer arithmetic.
pub mod parser;
