//! Rule sets and the resolution algorithm
//!
//! A [`RuleSet`] is an ordered list of rules for one logical command;
//! declaration order is the primary tie-break. [`PackageResolver`] runs the
//! search: expand the platform through its compatibility sequence, and at
//! each expansion step scan the rules in declaration order, returning the
//! first match. A rule declared for the platform's exact distro release
//! therefore always beats one reachable only through a compatibility edge.
//!
//! Resolution is a pure function of the rule tables and its two inputs.
//! Rule sets are built once and never mutated, so a resolver can be shared
//! freely across threads.

use crate::command::Command;
use crate::compat;
use crate::platform::{OsFamily, Platform};
use crate::rule::{Package, Rule, TemplateError};
use crate::rules;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered collection of rules for one logical command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a group of rules, keeping declaration order.
    ///
    /// Tables compose rule sets from logical groups (dev rules, release
    /// rules, tools rules) with repeated calls.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// The rules in declaration order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Typed "nothing matched" outcome, carrying what was asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unsupported {
    pub command: Command,
    pub platform: Platform,
    pub version: Version,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no download archive known for {} {} on {}",
            self.command, self.version, self.platform
        )
    }
}

/// Outcome of a resolution: a bound artifact or a typed miss.
///
/// An unmatched platform/version is an expected result the caller decides
/// how to handle, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    Package(Package),
    Unsupported(Unsupported),
}

impl Resolution {
    /// The resolved package, if any
    #[must_use]
    pub fn package(&self) -> Option<&Package> {
        match self {
            Self::Package(package) => Some(package),
            Self::Unsupported(_) => None,
        }
    }
}

/// Resolves download archives for one logical command.
///
/// Holds the rule sets for every OS family, built once at construction
/// from the static tables and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    command: Command,
    linux: RuleSet,
    macos: RuleSet,
    windows: RuleSet,
}

impl PackageResolver {
    /// Build the resolver for a command from the static rule tables
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            command,
            linux: rules::rule_set(command, OsFamily::Linux),
            macos: rules::rule_set(command, OsFamily::MacOs),
            windows: rules::rule_set(command, OsFamily::Windows),
        }
    }

    /// The command this resolver serves
    #[inline]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// The rule set consulted for an OS family
    #[must_use]
    pub const fn rule_set(&self, os: OsFamily) -> &RuleSet {
        match os {
            OsFamily::Linux => &self.linux,
            OsFamily::MacOs => &self.macos,
            OsFamily::Windows => &self.windows,
        }
    }

    /// Resolve the download archive for (platform, version).
    ///
    /// Returns [`Resolution::Unsupported`] when no rule matches after full
    /// compatibility expansion. A [`TemplateError`] means a rule matched
    /// but its table entry is broken, which is a configuration defect.
    pub fn resolve(
        &self,
        platform: &Platform,
        version: &Version,
    ) -> Result<Resolution, TemplateError> {
        let rule_set = self.rule_set(platform.os);

        for variant in compat::expand(platform) {
            crate::debug!(
                "scanning {} {} rules for {variant}",
                rule_set.len(),
                self.command
            );
            for rule in rule_set.rules() {
                if rule.accepts(&variant, version) {
                    crate::debug!("matched rule {}", rule.template());
                    return rule.package(version).map(Resolution::Package);
                }
            }
        }
        crate::debug!("no rule matched {platform} for {version}");

        Ok(Resolution::Unsupported(Unsupported {
            command: self.command,
            platform: platform.clone(),
            version: version.clone(),
        }))
    }
}

/// Resolve a download archive in one call.
///
/// Convenience wrapper building a [`PackageResolver`] for the command;
/// callers resolving repeatedly should keep the resolver around instead.
pub fn resolve(
    command: Command,
    platform: &Platform,
    version: &Version,
) -> Result<Resolution, TemplateError> {
    PackageResolver::new(command).resolve(platform, version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::DistroVersion;
    use crate::platform::Architecture;
    use crate::range::VersionRange;
    use crate::rule::FileSet;

    fn rule_with_template(template: &str, range: VersionRange) -> Rule {
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros([DistroVersion::Debian(crate::distro::DebianVersion::Debian10)])
            .range(range)
            .file_set(FileSet::executable("mongod"))
            .build()
    }

    #[test]
    fn with_rules_appends_in_declaration_order() {
        let first = rule_with_template(
            "/first-{version}.tgz",
            VersionRange::exact(Version::new(5, 0, 2)),
        );
        let second = rule_with_template(
            "/second-{version}.tgz",
            VersionRange::exact(Version::new(5, 0, 2)),
        );

        let rule_set = RuleSet::new()
            .with_rules([first.clone()])
            .with_rules([second]);

        assert_eq!(rule_set.len(), 2);
        assert_eq!(rule_set.rules()[0], first);
    }

    #[test]
    fn unsupported_names_the_request() {
        let unsupported = Unsupported {
            command: Command::Mongod,
            platform: Platform::new(OsFamily::Linux, Architecture::X64),
            version: Version::new(9, 9, 9),
        };
        assert_eq!(
            unsupported.to_string(),
            "no download archive known for mongod 9.9.9 on linux/x86_64"
        );
    }
}
