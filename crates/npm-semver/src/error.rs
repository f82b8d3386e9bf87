//! Parse errors

use thiserror::Error;

use crate::token::TokenKind;

/// Error raised when a version or range expression cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected {kind} \"{text}\" at position {position}")]
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        position: usize,
    },
    #[error("illegal character \"{text}\" at position {position}")]
    IllegalCharacter { text: String, position: usize },
    #[error("numeric component \"{text}\" at position {position} is too large")]
    NumberOverflow { text: String, position: usize },
    #[error("hyphen range ends at \"{text}\" (position {position}) before it starts")]
    InvertedRange { text: String, position: usize },
}

impl SyntaxError {
    /// Byte offset into the input where the error was detected
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::IllegalCharacter { position, .. }
            | SyntaxError::NumberOverflow { position, .. }
            | SyntaxError::InvertedRange { position, .. } => *position,
        }
    }

    /// The literal text of the offending token
    pub fn text(&self) -> &str {
        match self {
            SyntaxError::UnexpectedToken { text, .. }
            | SyntaxError::IllegalCharacter { text, .. }
            | SyntaxError::NumberOverflow { text, .. }
            | SyntaxError::InvertedRange { text, .. } => text,
        }
    }
}
