//! Context-sensitive scanner for version and range expressions
//!
//! The meaning of `-`, `+`, `.` and `x` depends on where the scanner is inside
//! a version literal, so the scanner carries a small state machine alongside
//! the read cursor:
//!
//! ```text
//! BeforeVersion --literal--> Major --'.'--> Minor --'.'--> Patch
//! Patch --'-'--> Prerelease --'+'--> Build
//! Patch --'+'--> Build
//! any state --whitespace/operator/hyphen--> BeforeVersion
//! ```

use crate::token::{Token, TokenKind};

/// Position of the scanner relative to the version literal being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Between terms: after whitespace, an operator or at the start of input
    BeforeVersion,
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl ScanState {
    /// Whether `x`, `X` and `*` are placeholders and digit runs are numbers
    fn in_core(self) -> bool {
        matches!(
            self,
            ScanState::BeforeVersion | ScanState::Major | ScanState::Minor | ScanState::Patch
        )
    }

    /// State after a `.` separator
    fn next_component(self) -> Self {
        match self {
            ScanState::BeforeVersion | ScanState::Major => ScanState::Minor,
            ScanState::Minor => ScanState::Patch,
            other => other,
        }
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_identifier(ch: char) -> bool {
    ch == '-' || ch.is_ascii_alphanumeric()
}

/// Produces tokens one at a time from an in-memory expression
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    state: ScanState,
    last: Option<TokenKind>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            pos: 0,
            state: ScanState::BeforeVersion,
            last: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Byte offset of the next unread character
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Input text between two byte offsets
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or("")
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn follows_literal(&self) -> bool {
        matches!(
            self.last,
            Some(TokenKind::Number | TokenKind::Identifier | TokenKind::Placeholder)
        )
    }

    /// A literal in major position moves the scanner into the version
    fn enter_version(&mut self) {
        if self.state == ScanState::BeforeVersion {
            self.state = ScanState::Major;
        }
    }

    fn operator(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        self.state = ScanState::BeforeVersion;
        kind
    }

    /// Scan the next token. Never fails: unrecognized input becomes an
    /// [`TokenKind::Illegal`] token and end of input repeats [`TokenKind::End`].
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.pos;
        let Some(ch) = self.peek() else {
            return Token::new(TokenKind::End, "", start);
        };

        let kind = match ch {
            c if is_whitespace(c) => {
                self.eat_while(is_whitespace);
                self.state = ScanState::BeforeVersion;
                TokenKind::Whitespace
            }
            '.' => {
                self.bump();
                if self.follows_literal() {
                    self.state = self.state.next_component();
                    TokenKind::Separator
                } else {
                    TokenKind::Illegal
                }
            }
            '-' if self.state == ScanState::Patch && self.follows_literal() => {
                self.bump();
                self.state = ScanState::Prerelease;
                TokenKind::PrereleaseMarker
            }
            '+' if matches!(self.state, ScanState::Patch | ScanState::Prerelease)
                && self.follows_literal() =>
            {
                self.bump();
                self.state = ScanState::Build;
                TokenKind::BuildMarker
            }
            c if !self.state.in_core() && is_identifier(c) => {
                self.eat_while(is_identifier);
                TokenKind::Identifier
            }
            '-' => self.operator(TokenKind::Hyphen),
            c if c.is_ascii_digit() => {
                self.eat_while(|c| c.is_ascii_digit());
                self.enter_version();
                TokenKind::Number
            }
            '*' => {
                self.bump();
                self.enter_version();
                TokenKind::Placeholder
            }
            c if c.is_ascii_alphabetic() => {
                self.eat_while(|c| c.is_ascii_alphanumeric());
                self.enter_version();
                match &self.input[start..self.pos] {
                    "x" | "X" => TokenKind::Placeholder,
                    _ => TokenKind::Identifier,
                }
            }
            '>' => self.operator(TokenKind::GreaterThan),
            '<' => self.operator(TokenKind::LessThan),
            '=' => self.operator(TokenKind::Equals),
            '!' => self.operator(TokenKind::Not),
            '~' => self.operator(TokenKind::Tilde),
            '^' => self.operator(TokenKind::Caret),
            '|' => {
                self.bump();
                if self.peek() == Some('|') {
                    self.operator(TokenKind::Or)
                } else {
                    self.bump();
                    TokenKind::Illegal
                }
            }
            _ => {
                self.bump();
                TokenKind::Illegal
            }
        };

        self.last = Some(kind);
        Token::new(kind, &self.input[start..self.pos], start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::End {
            None
        } else {
            Some(token)
        }
    }
}
