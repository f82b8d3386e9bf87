//! Semver facade providing high-level version operations

use crate::range::Matcher;
use crate::version::Version;

/// Main facade for string-in, answer-out version queries
pub struct Semver;

impl Semver {
    /// Parse `version` strictly, returning `None` when it is not a version
    pub fn valid(version: &str) -> Option<Version> {
        Version::parse(version).ok()
    }

    /// Check if a version satisfies a range expression
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };
        match Matcher::parse(range) {
            Ok(matcher) => matcher.matches(&version),
            Err(err) => {
                log::debug!("invalid range {:?}: {}", range, err);
                false
            }
        }
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let Ok(matcher) = Matcher::parse(range) else {
            return Vec::new();
        };

        Self::parse_all(versions)
            .filter(|(_, version)| matcher.matches(version))
            .map(|(i, _)| versions[i].to_string())
            .collect()
    }

    /// Highest version that satisfies the range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let matcher = Matcher::parse(range).ok()?;
        Self::parse_all(versions)
            .filter(|(_, version)| matcher.matches(version))
            .max_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(i, _)| versions[i].to_string())
    }

    /// Lowest version that satisfies the range
    pub fn min_satisfying(versions: &[&str], range: &str) -> Option<String> {
        let matcher = Matcher::parse(range).ok()?;
        Self::parse_all(versions)
            .filter(|(_, version)| matcher.matches(version))
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(i, _)| versions[i].to_string())
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(usize, Version)> = Self::parse_all(versions).collect();

        parsed.sort_by(|(_, a), (_, b)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(i, _)| versions[i].to_string())
            .collect()
    }

    /// Parse each input, skipping the ones that are not versions
    fn parse_all<'a>(versions: &'a [&str]) -> impl Iterator<Item = (usize, Version)> + 'a {
        versions.iter().enumerate().filter_map(|(i, v)| match Version::parse(v) {
            Ok(version) => Some((i, version)),
            Err(err) => {
                log::debug!("skipping {:?}: {}", v, err);
                None
            }
        })
    }
}
