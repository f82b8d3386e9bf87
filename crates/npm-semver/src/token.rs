//! Lexical tokens of the version and range grammars

use std::fmt;

/// Classification of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    End,
    /// Character that starts no valid token
    Illegal,
    /// Run of blanks, tabs and newlines
    Whitespace,
    /// Run of ASCII digits inside major, minor or patch
    Number,
    /// Run of letters, digits and hyphens
    Identifier,
    /// `x`, `X` or `*` standing for any value of a component
    Placeholder,
    /// `.` between components or identifiers
    Separator,
    /// `-` between two terms of a hyphen range
    Hyphen,
    /// `-` introducing prerelease identifiers
    PrereleaseMarker,
    /// `+` introducing build metadata
    BuildMarker,
    Tilde,
    Caret,
    GreaterThan,
    LessThan,
    Equals,
    Not,
    /// `||`
    Or,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::End => "end of input",
            TokenKind::Illegal => "illegal character",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Placeholder => "placeholder",
            TokenKind::Separator => "separator",
            TokenKind::Hyphen => "hyphen",
            TokenKind::PrereleaseMarker => "prerelease marker",
            TokenKind::BuildMarker => "build marker",
            TokenKind::Tilde => "tilde",
            TokenKind::Caret => "caret",
            TokenKind::GreaterThan => "greater-than",
            TokenKind::LessThan => "less-than",
            TokenKind::Equals => "equals",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
        }
    }

    /// Whether the token starts an operator range (`^1.2`, `>=1`, `!1.2.3`)
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Tilde
                | TokenKind::Caret
                | TokenKind::GreaterThan
                | TokenKind::LessThan
                | TokenKind::Equals
                | TokenKind::Not
        )
    }

    /// Whether the token can start a bare fuzzy term
    pub fn is_term_start(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Identifier | TokenKind::Placeholder
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the input
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Token {
            kind,
            text,
            position,
        }
    }
}
