//! Range operators and the rewrites they apply to fuzzy terms

use std::fmt;

use super::Range;
use crate::version::Version;

/// Operators that turn the interval of a fuzzy term into a new interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Compatible with: upgrades that keep the first nonzero component (^)
    Caret,
    /// Patch-level changes (~)
    Tilde,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Equal (=), the term itself
    Equal,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Caret => "^",
            Operator::Tilde => "~",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Equal => "=",
        }
    }

    /// Rewrite the interval of a fuzzy term
    pub fn apply(self, range: Range) -> Range {
        match self {
            Operator::Caret => rewrite_caret(range),
            Operator::Tilde => rewrite_tilde(range),
            Operator::LessThan => Range {
                exclusive_max: range.min.is_some(),
                max: range.min,
                min: None,
                exclusive_min: false,
            },
            Operator::LessThanOrEqual => Range {
                min: None,
                exclusive_min: false,
                ..range
            },
            Operator::GreaterThan => Range {
                // an exclusive fuzzy max already sits one step above the term
                exclusive_min: range.max.is_some() && !range.exclusive_max,
                min: range.max,
                max: None,
                exclusive_max: false,
            },
            Operator::GreaterThanOrEqual => Range {
                max: None,
                exclusive_max: false,
                ..range
            },
            Operator::Equal => range,
        }
    }

    /// Combine the two ends of a hyphen range (`from - to`)
    pub fn hyphen(from: Range, to: Range) -> Range {
        Range {
            min: from.min,
            exclusive_min: from.exclusive_min,
            max: to.max,
            exclusive_max: to.exclusive_max,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `^`: keep the first nonzero component of the lower bound pinned and allow
/// everything below it to change
pub fn rewrite_caret(range: Range) -> Range {
    let (Some(min), Some(max)) = (range.min, range.max) else {
        return Range::any();
    };

    let bumped = if min.major > 0 {
        Version::new(min.major + 1, 0, 0)
    } else if min.minor > 0 {
        Version::new(0, min.minor + 1, 0)
    } else if min.patch > 0 {
        Version::new(0, 0, min.patch + 1)
    } else {
        return Range {
            min: Some(min),
            max: Some(max.without_prerelease()),
            ..range
        };
    };

    Range {
        min: Some(min),
        max: Some(bumped),
        exclusive_min: range.exclusive_min,
        exclusive_max: true,
    }
}

/// `~`: allow patch-level changes when a minor version is given
pub fn rewrite_tilde(range: Range) -> Range {
    let (Some(min), Some(max)) = (range.min, range.max) else {
        return Range::any();
    };

    let bumped = if min.minor > 0 {
        Version::new(min.major, min.minor + 1, 0)
    } else if min.patch > 0 {
        Version::new(min.major, 0, min.patch + 1)
    } else {
        return Range {
            min: Some(min),
            max: Some(max.without_prerelease()),
            ..range
        };
    };

    Range {
        min: Some(min),
        max: Some(bumped),
        exclusive_min: range.exclusive_min,
        exclusive_max: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_caret() {
        assert_eq!(rewrite_caret(Range::exact(v("1.2.3"))).to_string(), ">=1.2.3 <2.0.0");
        assert_eq!(rewrite_caret(Range::exact(v("0.2.3"))).to_string(), ">=0.2.3 <0.3.0");
        assert_eq!(rewrite_caret(Range::exact(v("0.0.3"))).to_string(), ">=0.0.3 <0.0.4");
        assert_eq!(rewrite_caret(Range::minor(1, 2)).to_string(), ">=1.2.0 <2.0.0");
        assert_eq!(rewrite_caret(Range::minor(0, 0)).to_string(), ">=0.0.0 <0.1.0");
        assert_eq!(rewrite_caret(Range::major(0)).to_string(), ">=0.0.0 <1.0.0");
        assert_eq!(rewrite_caret(Range::exact(v("0.0.0"))).to_string(), ">=0.0.0 <=0.0.0");
        assert_eq!(
            rewrite_caret(Range::patch(v("1.2.3-beta.2"))).to_string(),
            ">=1.2.3-beta.2 <2.0.0"
        );
        assert_eq!(
            rewrite_caret(Range::patch(v("0.0.0-rc"))).to_string(),
            ">=0.0.0-rc <=0.0.0"
        );
        assert!(rewrite_caret(Range::any()).is_any());
    }

    #[test]
    fn test_tilde() {
        assert_eq!(rewrite_tilde(Range::exact(v("1.2.3"))).to_string(), ">=1.2.3 <1.3.0");
        assert_eq!(rewrite_tilde(Range::minor(1, 2)).to_string(), ">=1.2.0 <1.3.0");
        assert_eq!(rewrite_tilde(Range::major(1)).to_string(), ">=1.0.0 <2.0.0");
        assert_eq!(rewrite_tilde(Range::exact(v("1.0.3"))).to_string(), ">=1.0.3 <1.0.4");
        assert_eq!(rewrite_tilde(Range::minor(1, 0)).to_string(), ">=1.0.0 <1.1.0");
        assert_eq!(
            rewrite_tilde(Range::patch(v("1.2.3-beta"))).to_string(),
            ">=1.2.3-beta <1.3.0"
        );
        assert!(rewrite_tilde(Range::any()).is_any());
    }

    #[test]
    fn test_comparisons() {
        let term = Range::minor(1, 2);
        assert_eq!(Operator::LessThan.apply(term.clone()).to_string(), "<1.2.0");
        assert_eq!(Operator::LessThanOrEqual.apply(term.clone()).to_string(), "<1.3.0");
        assert_eq!(Operator::GreaterThan.apply(term.clone()).to_string(), ">=1.3.0");
        assert_eq!(Operator::GreaterThanOrEqual.apply(term.clone()).to_string(), ">=1.2.0");
        assert_eq!(Operator::Equal.apply(term.clone()), term);

        let exact = Range::exact(v("1.2.3"));
        assert_eq!(Operator::LessThan.apply(exact.clone()).to_string(), "<1.2.3");
        assert_eq!(Operator::LessThanOrEqual.apply(exact.clone()).to_string(), "<=1.2.3");
        assert_eq!(Operator::GreaterThan.apply(exact.clone()).to_string(), ">1.2.3");
        assert_eq!(Operator::GreaterThanOrEqual.apply(exact).to_string(), ">=1.2.3");
    }

    #[test]
    fn test_comparisons_on_prerelease_term() {
        let term = Range::patch(v("1.2.3-rc"));
        assert_eq!(Operator::Equal.apply(term.clone()).to_string(), ">=1.2.3-rc <=1.2.3");
        assert_eq!(Operator::LessThan.apply(term.clone()).to_string(), "<1.2.3-rc");
        assert_eq!(Operator::LessThanOrEqual.apply(term.clone()).to_string(), "<=1.2.3");
        assert_eq!(Operator::GreaterThan.apply(term.clone()).to_string(), ">1.2.3");
        assert_eq!(Operator::GreaterThanOrEqual.apply(term).to_string(), ">=1.2.3-rc");
    }

    #[test]
    fn test_comparisons_on_any() {
        for op in [
            Operator::LessThan,
            Operator::LessThanOrEqual,
            Operator::GreaterThan,
            Operator::GreaterThanOrEqual,
            Operator::Equal,
        ] {
            assert!(op.apply(Range::any()).is_any(), "{}*", op);
        }
    }

    #[test]
    fn test_hyphen() {
        let r = Operator::hyphen(Range::exact(v("1.2.3")), Range::minor(2, 3));
        assert_eq!(r.to_string(), ">=1.2.3 <2.4.0");
        let r = Operator::hyphen(Range::major(1), Range::any());
        assert_eq!(r.to_string(), ">=1.0.0");
    }
}
