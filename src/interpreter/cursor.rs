use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Deepest nesting of negated products the parser accepts.
pub const MAX_NESTING: usize = 256;

/// A positional reader over an owned token sequence with one token of
/// pushback.
///
/// The position always lies in `[0, len]`. `unread` may only follow a
/// successful `next`; calling it twice in a row is a logic error in the
/// caller and panics.
///
/// The cursor also counts how deeply the parser has nested, so that input
/// like a long run of `-` fails with an error instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens:     Vec<Token>,
    position:   usize,
    can_unread: bool,
    depth:      usize,
}

impl TokenCursor {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens,
               position: 0,
               can_unread: false,
               depth: 0 }
    }

    /// Reads the token at the current position and advances past it.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEndOfInput` if the cursor is already at
    /// the end of the sequence. This only happens for sequences that lack an
    /// `EndOfInput` marker.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseResult<&Token> {
        let Some(token) = self.tokens.get(self.position) else {
            return Err(ParseError::UnexpectedEndOfInput { position: self.position }.into());
        };
        self.position += 1;
        self.can_unread = true;
        Ok(token)
    }

    /// Pushes the most recently read token back.
    ///
    /// # Panics
    /// Panics if no token has been read since the last `unread`.
    pub fn unread(&mut self) {
        assert!(self.can_unread,
                "unread at position {} without a preceding next",
                self.position);
        self.position -= 1;
        self.can_unread = false;
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the parser is already
    /// [`MAX_NESTING`] levels deep.
    pub fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position: self.position }.into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves the innermost level of nesting.
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The index of the next token to be read.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The number of tokens not yet read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// The total number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
