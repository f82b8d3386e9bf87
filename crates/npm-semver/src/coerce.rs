//! Lenient extraction of a version from arbitrary text

use lazy_static::lazy_static;
use regex::Regex;

use crate::parser::MAX_COMPONENT;
use crate::version::Version;

lazy_static! {
    // First run of up to three dot-separated numbers, each taken whole
    static ref COERCE_RE: Regex = Regex::new(
        r"(?:^|[^\d])(\d+)(?:\.(\d+))?(?:\.(\d+))?"
    ).unwrap();
}

/// Pull the first `major[.minor[.patch]]` out of `text`, filling missing
/// components with zero. Prerelease and build data are dropped. Returns
/// `None` when any of those numbers is too large to be a component.
///
/// ```
/// use npm_semver::coerce;
///
/// assert_eq!(coerce("v2").unwrap().to_string(), "2.0.0");
/// assert_eq!(coerce("release 1.4 final").unwrap().to_string(), "1.4.0");
/// assert!(coerce("no digits").is_none());
/// ```
pub fn coerce(text: &str) -> Option<Version> {
    let caps = COERCE_RE.captures(text)?;

    let component = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok().filter(|n| *n <= MAX_COMPONENT),
            None => Some(0),
        }
    };

    let version = Version::new(component(1)?, component(2)?, component(3)?);
    log::trace!("coerced {:?} to {}", text, version);
    Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerced(text: &str) -> Option<String> {
        coerce(text).map(|v| v.to_string())
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerced("1"), Some("1.0.0".to_string()));
        assert_eq!(coerced("1.2"), Some("1.2.0".to_string()));
        assert_eq!(coerced("1.2.3"), Some("1.2.3".to_string()));
        assert_eq!(coerced("1.2.3.4"), Some("1.2.3".to_string()));
        assert_eq!(coerced("v3.4 replaces v3.3"), Some("3.4.0".to_string()));
        assert_eq!(coerced("=1.2.3-rc.1+build"), Some("1.2.3".to_string()));
        assert_eq!(coerced("version 42 stable"), Some("42.0.0".to_string()));
    }

    #[test]
    fn test_coerce_fails() {
        assert_eq!(coerced(""), None);
        assert_eq!(coerced("abc"), None);
        assert_eq!(coerced("1234567890123456789"), None);
        assert_eq!(coerced("9999999999999999.0.0"), None);
        assert_eq!(coerced("12345678901234567.1"), None);
        assert_eq!(coerced("v1.123456789012345678901234"), None);
        assert_eq!(coerced("9007199254740991.0.0"), Some("9007199254740991.0.0".to_string()));
    }
}
