use log::trace;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Runs of spaces are skipped. Any other character outside the patterns below
/// is a lexical error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// A maximal run of decimal digits, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Number,
    /// Marks the end of the token stream. Never matched from input.
    EndOfInput,
}

/// A classified slice of the input.
///
/// Operators carry their single character, numbers carry their digits
/// unparsed, and the end marker carries empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of the given kind with the given text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates the end-of-input marker.
    #[must_use]
    pub const fn end_of_input() -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: String::new() }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text this token was read from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Converts source text into a token sequence terminated by `EndOfInput`.
///
/// The scan is a single forward pass. Spaces separate tokens but produce none.
///
/// # Errors
/// Returns `LexError::UnexpectedCharacter` for the first character that is not
/// a digit, one of `+ - * /`, or a space. Its position is a zero-based
/// character index.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("12 + 3").unwrap().iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let Ok(kind) = kind else {
            let start = lexer.span().start;
            let character = source[start..].chars().next().unwrap_or_default();
            let position = source[..start].chars().count();
            return Err(LexError::UnexpectedCharacter { character, position });
        };
        trace!("lexed {kind:?} {:?} at {:?}", lexer.slice(), lexer.span());
        tokens.push(Token::new(kind, lexer.slice()));
    }

    tokens.push(Token::end_of_input());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn empty_input_is_only_end_marker() {
        assert_eq!(tokenize("").unwrap(), vec![Token::end_of_input()]);
        assert_eq!(tokenize("    ").unwrap(), vec![Token::end_of_input()]);
    }

    #[test]
    fn operators_and_numbers() {
        use TokenKind::{EndOfInput, Minus, Number, Plus, Slash, Star};

        assert_eq!(kinds("1+2-3*4/5"),
                   [Number, Plus, Number, Minus, Number, Star, Number, Slash, Number, EndOfInput]);
    }

    #[test]
    fn digits_are_read_greedily() {
        let tokens = tokenize("  1234  56").unwrap();
        assert_eq!(tokens,
                   vec![Token::new(TokenKind::Number, "1234"),
                        Token::new(TokenKind::Number, "56"),
                        Token::end_of_input()]);
    }

    #[test]
    fn operator_text_is_single_character() {
        let tokens = tokenize("-*").unwrap();
        assert_eq!(tokens[0].text(), "-");
        assert_eq!(tokens[1].text(), "*");
        assert_eq!(tokens[2].text(), "");
    }

    #[test]
    fn number_text_is_kept_unparsed() {
        let tokens = tokenize("007").unwrap();
        assert_eq!(tokens[0].text(), "007");
    }

    #[test]
    fn unknown_character_reports_position() {
        assert_eq!(tokenize("3+a"),
                   Err(LexError::UnexpectedCharacter { character: 'a',
                                                       position:  2, }));
    }

    #[test]
    fn parentheses_and_tabs_are_rejected() {
        assert_eq!(tokenize("(1)"),
                   Err(LexError::UnexpectedCharacter { character: '(',
                                                       position:  0, }));
        assert_eq!(tokenize("1\t+ 2"),
                   Err(LexError::UnexpectedCharacter { character: '\t',
                                                       position:  1, }));
    }

    #[test]
    fn position_counts_characters_not_bytes() {
        assert_eq!(tokenize("1 ✓ 2"),
                   Err(LexError::UnexpectedCharacter { character: '✓',
                                                       position:  2, }));
        assert_eq!(tokenize("é1?"),
                   Err(LexError::UnexpectedCharacter { character: 'é',
                                                       position:  0, }));
    }
}
