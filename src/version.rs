//! Software version model
//!
//! A [`Version`] is a numeric triple plus an optional pre-release tag,
//! tagged with the axis it lives on: the product itself or the separately
//! shipped database tools. Ordering is a single explicit multi-key
//! comparison: numeric triple first (a pre-release sorts below its
//! release), then declared priority descending, then the rendered name for
//! determinism.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which version axis a version lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    /// Version of the product itself (mongod, mongos, mongo shell)
    Product,
    /// Version of the database tools shipped separately since the 100.x line
    Tools,
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => f.write_str("product"),
            Self::Tools => f.write_str("tools"),
        }
    }
}

/// Error returned when a version string cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version '{0}': expected MAJOR.MINOR.PATCH with an optional pre-release tag")]
    Malformed(String),
}

/// An immutable software version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Pre-release tag such as "rc8", compared below the plain release
    pub pre_release: Option<String>,
    pub kind: VersionKind,
    /// Tie-break between otherwise equal versions, higher wins (default 0)
    pub priority: i32,
}

impl Version {
    /// Create a product version
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            kind: VersionKind::Product,
            priority: 0,
        }
    }

    /// Create a tools version
    #[must_use]
    pub const fn tools(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            kind: VersionKind::Tools,
            priority: 0,
        }
    }

    /// Attach a pre-release tag (e.g. "rc8")
    #[must_use]
    pub fn with_pre_release(mut self, tag: impl Into<String>) -> Self {
        self.pre_release = Some(tag.into());
        self
    }

    /// Override the tie-break priority
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Parse a version string on the given axis
    pub fn parse(input: &str, kind: VersionKind) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let (numeric, pre_release) = match trimmed.split_once('-') {
            Some((numeric, tag)) if !tag.is_empty() => (numeric, Some(tag)),
            Some(_) => return Err(VersionError::Malformed(input.to_string())),
            None => (trimmed, None),
        };

        let mut parts = numeric.split('.');
        let mut next_number = || {
            parts
                .next()
                .and_then(|part| part.parse::<u32>().ok())
                .ok_or_else(|| VersionError::Malformed(input.to_string()))
        };
        let (major, minor, patch) = (next_number()?, next_number()?, next_number()?);
        if parts.next().is_some() {
            return Err(VersionError::Malformed(input.to_string()));
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
            kind,
            priority: 0,
        })
    }

    /// Whether this version carries a pre-release tag
    #[inline]
    pub const fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Pre-release channel: the alphabetic prefix of the tag ("rc" for
    /// "rc8"), or the whole tag when it has no numeric suffix
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.pre_release.as_deref().map(|tag| {
            let end = tag
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(tag.len());
            &tag[..end]
        })
    }

    /// Compare by release number only: numeric triple, then pre-release
    /// below the plain release, then pre-release tags numerically within a
    /// channel. Kind and priority are ignored.
    #[must_use]
    pub fn cmp_release(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| cmp_pre_release(self.pre_release.as_deref(), other.pre_release.as_deref()))
    }
}

/// Pre-release tags sort below no tag; tags themselves compare by channel
/// and then by numeric suffix ("rc2" < "rc10").
fn cmp_pre_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let split = |tag: &str| {
                let at = tag
                    .find(|c: char| c.is_ascii_digit())
                    .unwrap_or(tag.len());
                let number = tag[at..].parse::<u32>().unwrap_or(0);
                (tag[..at].to_string(), number)
            };
            let (a_channel, a_number) = split(a);
            let (b_channel, b_number) = split(b);
            a_channel
                .cmp(&b_channel)
                .then_with(|| a_number.cmp(&b_number))
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.cmp_release(other))
            .then_with(|| other.priority.cmp(&self.priority))
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = &self.pre_release {
            write!(f, "-{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parse a product version; use [`Version::parse`] for tools versions.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input, VersionKind::Product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_pre_release_versions() {
        assert_eq!("5.0.2".parse::<Version>(), Ok(Version::new(5, 0, 2)));
        assert_eq!(
            "7.0.0-rc8".parse::<Version>(),
            Ok(Version::new(7, 0, 0).with_pre_release("rc8"))
        );
        assert_eq!(
            Version::parse("100.7.2", VersionKind::Tools),
            Ok(Version::tools(100, 7, 2))
        );
    }

    #[test]
    fn rejects_malformed_versions() {
        for input in ["5.0", "5", "5.0.2.1", "5.0.x", "", "5.0.2-"] {
            assert!(input.parse::<Version>().is_err(), "accepted '{input}'");
        }
    }

    #[test]
    fn pre_release_sorts_below_its_release() {
        let rc = Version::new(7, 0, 0).with_pre_release("rc8");
        let release = Version::new(7, 0, 0);
        assert_eq!(rc.cmp_release(&release), Ordering::Less);
        assert_eq!(release.cmp_release(&rc), Ordering::Greater);
    }

    #[test]
    fn pre_release_tags_compare_numerically_within_a_channel() {
        let rc2 = Version::new(7, 0, 0).with_pre_release("rc2");
        let rc10 = Version::new(7, 0, 0).with_pre_release("rc10");
        assert_eq!(rc2.cmp_release(&rc10), Ordering::Less);
        assert_eq!(rc2.channel(), Some("rc"));
        assert_eq!(rc10.channel(), Some("rc"));
    }

    #[test]
    fn priority_breaks_ties_descending() {
        let plain = Version::new(5, 0, 2);
        let preferred = Version::new(5, 0, 2).with_priority(10);
        assert_eq!(plain.cmp_release(&preferred), Ordering::Equal);
        assert!(preferred < plain);
    }

    #[test]
    fn displays_round_trip() {
        for input in ["5.0.2", "7.0.0-rc8", "4.4.24-rc0"] {
            assert_eq!(input.parse::<Version>().unwrap().to_string(), input);
        }
    }
}
