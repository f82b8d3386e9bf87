//! npm-style semantic version ranges
//!
//! This crate parses versions and range expressions in the dialect used by
//! npm (`^1.2.3`, `~1.2`, `1.x || >=2.0.0 <3`, `1.0.0 - 2.0.0`) and checks
//! versions against them.

mod coerce;
mod comparator;
mod error;
mod parser;
pub mod range;
mod scanner;
mod semver;
mod token;
mod version;

pub use coerce::coerce;
pub use comparator::{compare, compare_prerelease, Comparator};
pub use error::SyntaxError;
pub use parser::{Parser, MAX_COMPONENT};
pub use range::{rewrite_caret, rewrite_tilde, Matcher, Operator, Range};
pub use scanner::{ScanState, Scanner};
pub use semver::Semver;
pub use token::{Token, TokenKind};
pub use version::Version;

/// Parse a strict version string
pub fn parse_version(text: &str) -> Result<Version, SyntaxError> {
    Version::parse(text)
}

/// Parse a range expression into a matcher tree
pub fn parse_range(text: &str) -> Result<Matcher, SyntaxError> {
    Matcher::parse(text)
}
