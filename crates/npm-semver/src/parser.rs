//! Recursive-descent parser for versions and range expressions

use crate::error::SyntaxError;
use crate::range::{Matcher, Operator, Range};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};
use crate::version::Version;

/// Largest value a major, minor or patch component may take (2^53 - 1)
pub const MAX_COMPONENT: u64 = 9_007_199_254_740_991;

/// One `.`-separated component of a fuzzy term
enum Component {
    Number(u64),
    Any,
}

/// Pulls tokens from a [`Scanner`] on demand with one token of lookahead
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(input),
            lookahead: None,
        }
    }

    fn scan(&mut self) -> Token<'a> {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.scanner.next_token(),
        }
    }

    fn unscan(&mut self, token: Token<'a>) {
        debug_assert!(self.lookahead.is_none());
        self.lookahead = Some(token);
    }

    /// Byte offset just past the last consumed token
    fn offset(&self) -> usize {
        match &self.lookahead {
            Some(token) => token.position,
            None => self.scanner.offset(),
        }
    }

    fn scan_ignore_whitespace(&mut self) -> Token<'a> {
        let token = self.scan();
        if token.kind == TokenKind::Whitespace {
            self.scan()
        } else {
            token
        }
    }

    fn unexpected(token: Token<'_>) -> SyntaxError {
        match token.kind {
            TokenKind::Illegal => SyntaxError::IllegalCharacter {
                text: token.text.to_string(),
                position: token.position,
            },
            kind => SyntaxError::UnexpectedToken {
                kind,
                text: token.text.to_string(),
                position: token.position,
            },
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, SyntaxError> {
        let token = self.scan();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Self::unexpected(token))
        }
    }

    fn number(token: Token<'_>) -> Result<u64, SyntaxError> {
        if token.kind != TokenKind::Number {
            return Err(Self::unexpected(token));
        }
        match token.text.parse::<u64>() {
            Ok(n) if n <= MAX_COMPONENT => Ok(n),
            _ => Err(SyntaxError::NumberOverflow {
                text: token.text.to_string(),
                position: token.position,
            }),
        }
    }

    /// Require end of input, allowing trailing whitespace
    pub fn expect_end(&mut self) -> Result<(), SyntaxError> {
        let token = self.scan_ignore_whitespace();
        if token.kind == TokenKind::End {
            Ok(())
        } else {
            Err(Self::unexpected(token))
        }
    }

    /// Dot-separated identifiers following `marker`, or nothing if the next
    /// token is not `marker`
    fn identifiers_after(&mut self, marker: TokenKind) -> Result<Vec<String>, SyntaxError> {
        let token = self.scan();
        if token.kind != marker {
            self.unscan(token);
            return Ok(Vec::new());
        }

        let mut identifiers = Vec::new();
        loop {
            let token = self.scan();
            if !matches!(token.kind, TokenKind::Identifier | TokenKind::Number) {
                return Err(Self::unexpected(token));
            }
            identifiers.push(token.text.to_string());

            let next = self.scan();
            if next.kind != TokenKind::Separator {
                self.unscan(next);
                return Ok(identifiers);
            }
        }
    }

    /// Parse a strict `major.minor.patch[-prerelease][+build]` version
    pub fn parse_version(&mut self) -> Result<Version, SyntaxError> {
        let major = Self::number(self.scan_ignore_whitespace())?;
        self.expect(TokenKind::Separator)?;
        let minor = Self::number(self.scan())?;
        self.expect(TokenKind::Separator)?;
        let patch = Self::number(self.scan())?;

        let prerelease = self.identifiers_after(TokenKind::PrereleaseMarker)?;
        let build = self.identifiers_after(TokenKind::BuildMarker)?;

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    /// The next `.component`, if any
    fn component(&mut self) -> Result<Option<Component>, SyntaxError> {
        let token = self.scan();
        if token.kind != TokenKind::Separator {
            self.unscan(token);
            return Ok(None);
        }

        let token = self.scan();
        match token.kind {
            TokenKind::Placeholder => Ok(Some(Component::Any)),
            _ => Self::number(token).map(|n| Some(Component::Number(n))),
        }
    }

    /// Components after a placeholder carry no information
    fn skip_components(&mut self, remaining: usize) -> Result<(), SyntaxError> {
        for _ in 0..remaining {
            if self.component()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Parse one fuzzy term (`1`, `1.2`, `1.2.x`, `1.2.3-rc.1`, `*`) into the
    /// half-open interval it denotes
    pub fn parse_range(&mut self) -> Result<Range, SyntaxError> {
        let token = self.scan_ignore_whitespace();
        let major = match token.kind {
            TokenKind::Placeholder => {
                self.skip_components(2)?;
                return Ok(Range::any());
            }
            _ => Self::number(token)?,
        };

        let minor = match self.component()? {
            Some(Component::Number(minor)) => minor,
            Some(Component::Any) => {
                self.skip_components(1)?;
                return Ok(Range::major(major));
            }
            None => return Ok(Range::major(major)),
        };

        let patch = match self.component()? {
            Some(Component::Number(patch)) => patch,
            Some(Component::Any) | None => return Ok(Range::minor(major, minor)),
        };

        let prerelease = self.identifiers_after(TokenKind::PrereleaseMarker)?;
        // build metadata never narrows a range
        self.identifiers_after(TokenKind::BuildMarker)?;

        Ok(Range::patch(Version {
            major,
            minor,
            patch,
            prerelease,
            build: Vec::new(),
        }))
    }

    /// Parse a term that starts with an operator
    pub fn parse_operator_range(&mut self) -> Result<Matcher, SyntaxError> {
        let token = self.scan();
        let operator = match token.kind {
            TokenKind::Not => {
                let version = self.parse_version()?;
                return Ok(Matcher::Not(Box::new(Matcher::Range(Range::exact(version)))));
            }
            TokenKind::Caret => Operator::Caret,
            TokenKind::Tilde => Operator::Tilde,
            TokenKind::LessThan | TokenKind::GreaterThan | TokenKind::Equals => {
                let mut has_eq = false;
                loop {
                    let next = self.scan();
                    if next.kind == TokenKind::Equals {
                        has_eq = true;
                        continue;
                    }
                    self.unscan(next);
                    break;
                }
                match (token.kind, has_eq) {
                    (TokenKind::LessThan, true) => Operator::LessThanOrEqual,
                    (TokenKind::LessThan, false) => Operator::LessThan,
                    (TokenKind::GreaterThan, true) => Operator::GreaterThanOrEqual,
                    (TokenKind::GreaterThan, false) => Operator::GreaterThan,
                    _ => Operator::Equal,
                }
            }
            _ => return Err(Self::unexpected(token)),
        };

        let range = self.parse_range()?;
        Ok(Matcher::Range(operator.apply(range)))
    }

    /// A term must be followed by whitespace, `||` or end of input
    fn expect_term_end(&mut self) -> Result<(), SyntaxError> {
        let token = self.scan();
        match token.kind {
            TokenKind::Whitespace | TokenKind::Or | TokenKind::End => {
                self.unscan(token);
                Ok(())
            }
            _ => Err(Self::unexpected(token)),
        }
    }

    /// Finish a bare fuzzy term, folding in `- <term>` when it is the start
    /// of a hyphen range
    fn finish_bare_term(&mut self, from: Range) -> Result<Range, SyntaxError> {
        let token = self.scan();
        match token.kind {
            TokenKind::Or | TokenKind::End => {
                self.unscan(token);
                Ok(from)
            }
            TokenKind::Whitespace => {
                let next = self.scan();
                if next.kind != TokenKind::Hyphen {
                    self.unscan(next);
                    return Ok(from);
                }
                let first = self.scan_ignore_whitespace();
                let position = first.position;
                self.unscan(first);

                let to = self.parse_range()?;
                let end = self.offset();
                self.expect_term_end()?;

                let range = Operator::hyphen(from, to);
                if range.is_empty() {
                    return Err(SyntaxError::InvertedRange {
                        text: self.scanner.slice(position, end).to_string(),
                        position,
                    });
                }
                Ok(range)
            }
            _ => Err(Self::unexpected(token)),
        }
    }

    /// Parse a complete range expression: whitespace-separated terms AND-ed
    /// together, groups separated by `||` OR-ed together
    pub fn parse(&mut self) -> Result<Matcher, SyntaxError> {
        let mut groups: Vec<Matcher> = Vec::new();
        let mut terms: Vec<Matcher> = Vec::new();
        let mut unconstrained = false;

        loop {
            let token = self.scan_ignore_whitespace();
            match token.kind {
                TokenKind::End => {
                    if !terms.is_empty() {
                        groups.push(Matcher::all(terms));
                    }
                    break;
                }
                TokenKind::Or => {
                    if terms.is_empty() {
                        // an empty alternative admits every version
                        unconstrained = true;
                    } else {
                        groups.push(Matcher::all(std::mem::take(&mut terms)));
                    }
                }
                kind if kind.is_operator() => {
                    self.unscan(token);
                    let matcher = self.parse_operator_range()?;
                    self.expect_term_end()?;
                    terms.push(matcher);
                }
                kind if kind.is_term_start() => {
                    self.unscan(token);
                    let range = self.parse_range()?;
                    let range = self.finish_bare_term(range)?;
                    terms.push(Matcher::Range(range));
                }
                _ => return Err(Self::unexpected(token)),
            }
        }

        if unconstrained {
            return Ok(Matcher::Range(Range::any()));
        }
        Ok(Matcher::any(groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(input: &str) -> Result<Version, SyntaxError> {
        let mut parser = Parser::new(input);
        let version = parser.parse_version()?;
        parser.expect_end()?;
        Ok(version)
    }

    fn range(input: &str) -> Range {
        let mut parser = Parser::new(input);
        let range = parser.parse_range().unwrap();
        parser.expect_end().unwrap();
        range
    }

    fn matcher(input: &str) -> Matcher {
        Parser::new(input).parse().unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_version() {
        let check = |input: &str, major, minor, patch, pre: &[&str], build: &[&str]| {
            let v = version(input).unwrap();
            assert_eq!(v.major, major, "major of {}", input);
            assert_eq!(v.minor, minor, "minor of {}", input);
            assert_eq!(v.patch, patch, "patch of {}", input);
            assert_eq!(v.prerelease, strings(pre), "prerelease of {}", input);
            assert_eq!(v.build, strings(build), "build of {}", input);
        };

        check("1.2.3", 1, 2, 3, &[], &[]);
        check("1.0.0", 1, 0, 0, &[], &[]);
        check("1.2654.0", 1, 2654, 0, &[], &[]);
        check("1.0.3", 1, 0, 3, &[], &[]);
        check("1.0.0-foo", 1, 0, 0, &["foo"], &[]);
        check("1.0.0-foo-bar", 1, 0, 0, &["foo-bar"], &[]);
        check("1.0.0-foo-bar.baz", 1, 0, 0, &["foo-bar", "baz"], &[]);
        check("1.0.0-foo+bin.1.foo", 1, 0, 0, &["foo"], &["bin", "1", "foo"]);
        check("1.0.0-foo-bar+bin.do", 1, 0, 0, &["foo-bar"], &["bin", "do"]);
        check("1.0.0-foo-bar.baz.3+bin.1", 1, 0, 0, &["foo-bar", "baz", "3"], &["bin", "1"]);
        check("1.0.0+bin-baz.1", 1, 0, 0, &[], &["bin-baz", "1"]);
        check("  1.2.3  ", 1, 2, 3, &[], &[]);
    }

    #[test]
    fn test_parse_version_fails() {
        for input in ["", "1", "1.2", "1.2.x", "1..2", "1.2.3-", "1.2.3+", "1.2.3-a.", "-1.2.3", "1.2.3.4", "a.b.c", "1.2.3 4"] {
            assert!(version(input).is_err(), "{} should not parse", input);
        }
    }

    #[test]
    fn test_parse_version_error_details() {
        let err = version("1.2.x").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                kind: TokenKind::Placeholder,
                text: "x".to_string(),
                position: 4,
            }
        );

        let err = version("1..2").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::IllegalCharacter {
                text: ".".to_string(),
                position: 2,
            }
        );

        let err = version("1.2.3-").unwrap_err();
        assert!(matches!(err, SyntaxError::UnexpectedToken { kind: TokenKind::End, position: 6, .. }));
    }

    #[test]
    fn test_number_overflow() {
        assert!(version("9007199254740991.0.0").is_ok());
        assert_eq!(
            version("9007199254740992.0.0").unwrap_err(),
            SyntaxError::NumberOverflow {
                text: "9007199254740992".to_string(),
                position: 0,
            }
        );
        assert!(matches!(
            version("1.99999999999999999999999.0").unwrap_err(),
            SyntaxError::NumberOverflow { position: 2, .. }
        ));
    }

    #[test]
    fn test_parse_fuzzy_range() {
        assert_eq!(range("*"), Range::any());
        assert_eq!(range("x"), Range::any());
        assert_eq!(range("X.x.*"), Range::any());
        assert_eq!(range("1"), Range::major(1));
        assert_eq!(range("1.x"), Range::major(1));
        assert_eq!(range("1.*.*"), Range::major(1));
        assert_eq!(range("1.2"), Range::minor(1, 2));
        assert_eq!(range("1.2.x"), Range::minor(1, 2));
        assert_eq!(range("1.2.3"), Range::exact(Version::new(1, 2, 3)));
        assert_eq!(range("1.2.3+build.7"), Range::exact(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_fuzzy_range_carries_prerelease() {
        let r = range("1.2.3-beta.2+exp");
        let min = r.min.unwrap();
        assert_eq!(min.prerelease, strings(&["beta", "2"]));
        assert!(min.build.is_empty());
        assert_eq!(r.max, Some(Version::new(1, 2, 3)));
        assert!(!r.exclusive_max);
    }

    #[test]
    fn test_single_terms_are_unwrapped() {
        assert!(matches!(matcher("1.2.3"), Matcher::Range(_)));
        assert!(matches!(matcher("!1.2.3"), Matcher::Not(_)));
        assert!(matches!(matcher(">=1 <2"), Matcher::All(ref terms) if terms.len() == 2));
        assert!(matches!(matcher("1 || 2"), Matcher::Any(ref groups) if groups.len() == 2));
        assert!(matches!(matcher("1 2 || 3"), Matcher::Any(ref groups) if matches!(groups[0], Matcher::All(_))));
    }

    #[test]
    fn test_empty_alternatives() {
        assert!(matcher("").is_any());
        assert!(matcher("   ").is_any());
        assert!(matcher("|| 1.2.3").is_any());
        assert!(matcher("1.2.3 || || 2").is_any());
        assert_eq!(matcher("1.x ||").to_string(), ">=1.0.0 <2.0.0");
    }

    #[test]
    fn test_operator_spacing() {
        assert_eq!(matcher(">= 1.2.3").to_string(), ">=1.2.3");
        assert_eq!(matcher("<==1.2").to_string(), "<1.3.0");
        assert_eq!(matcher("=1.2.3").to_string(), ">=1.2.3 <=1.2.3");
        assert_eq!(matcher("==1.2").to_string(), ">=1.2.0 <1.3.0");
    }

    #[test]
    fn test_hyphen_range() {
        assert_eq!(matcher("1.2.3 - 2.3.4").to_string(), ">=1.2.3 <=2.3.4");
        assert_eq!(matcher("1.2 - 2.3").to_string(), ">=1.2.0 <2.4.0");
        assert_eq!(matcher("1.2.3 - 2").to_string(), ">=1.2.3 <3.0.0");
        assert_eq!(matcher("* - 2").to_string(), "<3.0.0");
        assert_eq!(matcher("1 - 2 || 5").to_string(), ">=1.0.0 <3.0.0 || >=5.0.0 <6.0.0");
    }

    #[test]
    fn test_hyphen_range_must_not_be_inverted() {
        assert_eq!(
            Parser::new("3 - 1").parse().unwrap_err(),
            SyntaxError::InvertedRange {
                text: "1".to_string(),
                position: 4,
            }
        );
        assert_eq!(
            Parser::new(">=0.1.0 2.0.0 -  1.5.x || 3").parse().unwrap_err(),
            SyntaxError::InvertedRange {
                text: "1.5.x".to_string(),
                position: 17,
            }
        );
        assert!(Parser::new("2 - 1").parse().is_err());
        assert!(Parser::new("1.2.3 - 1.2.3").parse().is_ok());
        assert!(Parser::new("1.2.3-rc - 1.2.3-alpha").parse().is_ok());
    }

    #[test]
    fn test_parse_fails() {
        for input in [
            "1..2", "^", "~", ">=", "1.2.3-", "-1.2.3", "1.2.3 -", "1.2.3 - ", "!1.2", "1.2.3foo",
            ">=1.0.0<2", "a", "1 |", "^^1", "~>1.2", "1.2-3", "1.2.3 +4",
        ] {
            assert!(Parser::new(input).parse().is_err(), "{} should not parse", input);
        }
    }

    #[test]
    fn test_parse_fails_with_position() {
        let err = Parser::new(">=1.0.0 <2 ?").parse().unwrap_err();
        assert_eq!(err.position(), 11);
        assert_eq!(err.text(), "?");
    }
}
