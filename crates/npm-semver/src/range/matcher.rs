//! Matcher - the tree a range expression parses into

use std::fmt;
use std::str::FromStr;

use super::Range;
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::version::Version;

/// A parsed range expression.
///
/// Whitespace-separated terms become [`Matcher::All`], `||`-separated groups
/// become [`Matcher::Any`]; a group with a single member is never wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Matcher {
    Range(Range),
    Not(Box<Matcher>),
    All(Vec<Matcher>),
    Any(Vec<Matcher>),
}

impl Matcher {
    /// Parse a range expression such as `^1.2.3 || >=2.0.0 <3.0.0`
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let matcher = Parser::new(input).parse()?;
        log::trace!("parsed range {:?} as {}", input, matcher);
        Ok(matcher)
    }

    /// Conjunction of `matchers`, unwrapped when there is only one
    pub fn all(mut matchers: Vec<Matcher>) -> Self {
        match matchers.len() {
            0 => Matcher::Range(Range::any()),
            1 => matchers.remove(0),
            _ => Matcher::All(matchers),
        }
    }

    /// Disjunction of `matchers`, unwrapped when there is only one
    pub fn any(mut matchers: Vec<Matcher>) -> Self {
        match matchers.len() {
            0 => Matcher::Range(Range::any()),
            1 => matchers.remove(0),
            _ => Matcher::Any(matchers),
        }
    }

    /// Check whether `version` satisfies the expression
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Matcher::Range(range) => range.matches(version),
            Matcher::Not(inner) => !inner.matches(version),
            Matcher::All(matchers) => matchers.iter().all(|m| m.matches(version)),
            Matcher::Any(matchers) => matchers.iter().any(|m| m.matches(version)),
        }
    }

    /// Whether the expression is the unconstrained range
    pub fn is_any(&self) -> bool {
        matches!(self, Matcher::Range(range) if range.is_any())
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Range(range) => write!(f, "{}", range),
            Matcher::Not(inner) => match inner.as_ref() {
                Matcher::Range(range @ Range { min: Some(version), .. }) if range.is_exact() => {
                    write!(f, "!{}", version)
                }
                other => write!(f, "!{}", other),
            },
            Matcher::All(matchers) => {
                let parts: Vec<String> = matchers.iter().map(|m| m.to_string()).collect();
                f.write_str(&parts.join(" "))
            }
            Matcher::Any(matchers) => {
                let parts: Vec<String> = matchers.iter().map(|m| m.to_string()).collect();
                f.write_str(&parts.join(" || "))
            }
        }
    }
}

impl FromStr for Matcher {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matcher::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matcher {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matcher {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Matcher::parse(&text).map_err(serde::de::Error::custom)
    }
}
