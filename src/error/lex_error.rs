use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Found a character that is not a digit, an operator or a space.
    #[error("Unexpected character: '{character}' at position: {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index into the input.
        position:  usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_character_and_position() {
        let err = LexError::UnexpectedCharacter { character: 'a',
                                                  position:  2, };
        assert_eq!(err.to_string(), "Unexpected character: 'a' at position: 2.");
    }
}
