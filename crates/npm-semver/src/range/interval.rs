//! Range - an interval of versions with optional bounds

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// Versions between `min` and `max`, each bound optional and independently
/// inclusive or exclusive. A range with neither bound matches every version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub min: Option<Version>,
    pub max: Option<Version>,
    pub exclusive_min: bool,
    pub exclusive_max: bool,
}

impl Range {
    /// The unbounded range (`*`)
    pub fn any() -> Self {
        Range::default()
    }

    /// Exactly one version, inclusive at both ends
    pub fn exact(version: Version) -> Self {
        Range {
            min: Some(version.clone()),
            max: Some(version),
            exclusive_min: false,
            exclusive_max: false,
        }
    }

    /// A complete `M.m.p[-pre]` term: from the version itself up to and
    /// including its release, so `1.2.3-rc` also admits `1.2.3-rc.2` and `1.2.3`
    pub fn patch(version: Version) -> Self {
        let release = Version::new(version.major, version.minor, version.patch);
        Range {
            min: Some(version),
            max: Some(release),
            exclusive_min: false,
            exclusive_max: false,
        }
    }

    /// `[M.0.0, (M+1).0.0)`
    pub fn major(major: u64) -> Self {
        Range::half_open(Version::new(major, 0, 0), Version::new(major + 1, 0, 0))
    }

    /// `[M.m.0, M.(m+1).0)`
    pub fn minor(major: u64, minor: u64) -> Self {
        Range::half_open(Version::new(major, minor, 0), Version::new(major, minor + 1, 0))
    }

    /// `[min, max)`
    pub fn half_open(min: Version, max: Version) -> Self {
        Range {
            min: Some(min),
            max: Some(max),
            exclusive_min: false,
            exclusive_max: true,
        }
    }

    pub fn is_any(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether the range admits a single version only
    pub fn is_exact(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => !self.exclusive_min && !self.exclusive_max && min == max,
            _ => false,
        }
    }

    /// Whether no version can satisfy the bounds
    pub fn is_empty(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => match min.cmp(max) {
                Ordering::Greater => true,
                Ordering::Equal => self.exclusive_min || self.exclusive_max,
                Ordering::Less => false,
            },
            _ => false,
        }
    }

    /// Check whether `version` lies inside the range
    pub fn matches(&self, version: &Version) -> bool {
        if let Some(min) = &self.min {
            match version.cmp(min) {
                Ordering::Less => return false,
                Ordering::Equal if self.exclusive_min => return false,
                _ => {}
            }
        }
        if let Some(max) = &self.max {
            match version.cmp(max) {
                Ordering::Greater => return false,
                Ordering::Equal if self.exclusive_max => return false,
                _ => {}
            }
        }
        true
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("*");
        }

        if let Some(min) = &self.min {
            let op = if self.exclusive_min { ">" } else { ">=" };
            write!(f, "{}{}", op, min)?;
        }
        if let Some(max) = &self.max {
            if self.min.is_some() {
                f.write_str(" ")?;
            }
            let op = if self.exclusive_max { "<" } else { "<=" };
            write!(f, "{}{}", op, max)?;
        }
        Ok(())
    }
}
