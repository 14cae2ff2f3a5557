//! Inclusive version ranges
//!
//! A [`VersionRange`] is the version predicate building block of a rule:
//! inclusive on both bounds, optionally open at the top, and scoped to one
//! version kind. Pre-release bounds deliberately match narrowly so that
//! release-candidate archives are never offered for final releases or the
//! other way around.

use crate::version::{Version, VersionKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An inclusive version range, possibly open-ended at the top
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    lower: Version,
    upper: Option<Version>,
}

impl VersionRange {
    /// Range from `lower` to `upper`, inclusive on both bounds
    #[must_use]
    pub fn new(lower: Version, upper: Version) -> Self {
        Self {
            lower,
            upper: Some(upper),
        }
    }

    /// Range containing exactly one version
    #[must_use]
    pub fn exact(version: Version) -> Self {
        Self {
            upper: Some(version.clone()),
            lower: version,
        }
    }

    /// Open-ended range: everything at or above `lower`
    #[must_use]
    pub fn at_least(lower: Version) -> Self {
        Self { lower, upper: None }
    }

    /// The kind of version this range applies to
    #[inline]
    pub const fn kind(&self) -> VersionKind {
        self.lower.kind
    }

    /// Whether `version` falls inside this range.
    ///
    /// Kinds must match, bounds are inclusive, and pre-release versions only
    /// match ranges whose bounds are themselves pre-releases on the same
    /// channel (and vice versa).
    #[must_use]
    pub fn matches(&self, version: &Version) -> bool {
        if version.kind != self.kind() {
            return false;
        }

        let range_is_pre_release =
            self.lower.is_pre_release() || self.upper.as_ref().is_some_and(Version::is_pre_release);
        if version.is_pre_release() != range_is_pre_release {
            return false;
        }
        if version.is_pre_release() {
            let bound_channel = self
                .lower
                .channel()
                .or_else(|| self.upper.as_ref().and_then(|v| v.channel()));
            if bound_channel.is_some_and(|channel| Some(channel) != version.channel()) {
                return false;
            }
        }

        if self.lower.cmp_release(version) == Ordering::Greater {
            return false;
        }
        match &self.upper {
            Some(upper) => upper.cmp_release(version) != Ordering::Less,
            None => true,
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.upper {
            Some(upper) if *upper == self.lower => write!(f, "{}", self.lower),
            Some(upper) => write!(f, "{} -> {}", self.lower, upper),
            None => write!(f, ">= {}", self.lower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32, minor: u32, patch: u32) -> Version {
        Version::new(major, minor, patch)
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = VersionRange::new(v(4, 2, 5), v(4, 2, 16));
        assert!(range.matches(&v(4, 2, 5)));
        assert!(range.matches(&v(4, 2, 16)));
        assert!(range.matches(&v(4, 2, 10)));
        assert!(!range.matches(&v(4, 2, 4)));
        assert!(!range.matches(&v(4, 2, 17)));
    }

    #[test]
    fn exact_range_matches_one_version() {
        let range = VersionRange::exact(v(6, 0, 8));
        assert!(range.matches(&v(6, 0, 8)));
        assert!(!range.matches(&v(6, 0, 7)));
        assert!(!range.matches(&v(6, 0, 9)));
    }

    #[test]
    fn open_range_matches_everything_above() {
        let range = VersionRange::at_least(v(5, 0, 0));
        assert!(range.matches(&v(5, 0, 0)));
        assert!(range.matches(&v(9, 9, 9)));
        assert!(!range.matches(&v(4, 4, 24)));
    }

    #[test]
    fn kinds_never_cross_match() {
        let product = VersionRange::new(v(100, 0, 0), v(100, 7, 4));
        assert!(!product.matches(&Version::tools(100, 7, 2)));

        let tools = VersionRange::new(Version::tools(100, 7, 0), Version::tools(100, 7, 4));
        assert!(tools.matches(&Version::tools(100, 7, 2)));
        assert!(!tools.matches(&v(100, 7, 2)));
    }

    #[test]
    fn plain_ranges_never_match_pre_releases() {
        let range = VersionRange::new(v(6, 3, 1), v(6, 3, 2));
        assert!(!range.matches(&v(6, 3, 1).with_pre_release("rc1")));
    }

    #[test]
    fn pre_release_ranges_match_only_their_channel() {
        let range = VersionRange::exact(v(7, 0, 0).with_pre_release("rc8"));
        assert!(range.matches(&v(7, 0, 0).with_pre_release("rc8")));
        assert!(!range.matches(&v(7, 0, 0)));
        assert!(!range.matches(&v(7, 0, 0).with_pre_release("rc2")));
        assert!(!range.matches(&v(7, 0, 0).with_pre_release("alpha8")));
    }

    #[test]
    fn open_pre_release_range_matches_later_candidates() {
        let range = VersionRange::at_least(v(7, 0, 0).with_pre_release("rc2"));
        assert!(range.matches(&v(7, 0, 0).with_pre_release("rc2")));
        assert!(range.matches(&v(7, 0, 0).with_pre_release("rc10")));
        assert!(!range.matches(&v(7, 0, 0).with_pre_release("rc1")));
        assert!(!range.matches(&v(7, 0, 1)));
    }
}
