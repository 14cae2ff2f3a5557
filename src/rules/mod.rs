//! Static rule tables
//!
//! One module per distro family group, each declaring the archives upstream
//! actually published for it. The tables are data: adding a distro release
//! or version range is an edit here, never a new code path. `rule_set`
//! composes the flat, ordered rule set for a (command, OS family) pair.
//!
//! Tables enumerate per rule every distro release the archive is known to
//! work on, newest releases included explicitly (`DistroVersion::and_newer`),
//! exactly as upstream publishes its compatibility lists. The ARM and
//! x86_64 range lists differ on purpose: upstream never built some
//! combinations.

mod amazon;
mod debian;
mod linux;
mod macos;
mod redhat;
mod ubuntu;
mod windows;

use crate::command::Command;
use crate::platform::OsFamily;
use crate::range::VersionRange;
use crate::resolver::RuleSet;
use crate::version::Version;

/// Build the rule set consulted for a command on an OS family.
///
/// Declaration order inside the returned set is significant: it is the
/// primary tie-break during resolution. Distro-specific groups come first,
/// the distro-agnostic fallback and legacy rules last. Tool commands get
/// the database-tools tables plus the old server tables that still bundled
/// the tools; server commands never see the tools tables.
#[must_use]
pub fn rule_set(command: Command, os: OsFamily) -> RuleSet {
    match os {
        OsFamily::Linux => RuleSet::new()
            .with_rules(ubuntu::rules(command))
            .with_rules(debian::rules(command))
            .with_rules(redhat::rules(command))
            .with_rules(amazon::rules(command))
            .with_rules(linux::rules(command)),
        OsFamily::MacOs => RuleSet::new().with_rules(macos::rules(command)),
        OsFamily::Windows => RuleSet::new().with_rules(windows::rules(command)),
    }
}

// Range constructors shared by the tables. Versions are numeric literals
// so table construction is infallible.

pub(crate) fn range(lower: (u32, u32, u32), upper: (u32, u32, u32)) -> VersionRange {
    VersionRange::new(
        Version::new(lower.0, lower.1, lower.2),
        Version::new(upper.0, upper.1, upper.2),
    )
}

pub(crate) fn exact(only: (u32, u32, u32)) -> VersionRange {
    VersionRange::exact(Version::new(only.0, only.1, only.2))
}

pub(crate) fn pre(release: (u32, u32, u32), tag: &str) -> VersionRange {
    VersionRange::exact(Version::new(release.0, release.1, release.2).with_pre_release(tag))
}

pub(crate) fn tools_range(lower: (u32, u32, u32), upper: (u32, u32, u32)) -> VersionRange {
    VersionRange::new(
        Version::tools(lower.0, lower.1, lower.2),
        Version::tools(upper.0, upper.1, upper.2),
    )
}

pub(crate) fn tools_exact(only: (u32, u32, u32)) -> VersionRange {
    VersionRange::exact(Version::tools(only.0, only.1, only.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_linux_rules() {
        for command in Command::ALL {
            assert!(!rule_set(*command, OsFamily::Linux).is_empty());
        }
    }

    #[test]
    fn tool_tables_never_leak_into_server_commands() {
        let rule_set = rule_set(Command::Mongod, OsFamily::Linux);
        assert!(
            rule_set
                .rules()
                .iter()
                .all(|rule| !rule.template().contains("database-tools"))
        );
    }

    #[test]
    fn tool_commands_get_tools_tables_first() {
        let rule_set = rule_set(Command::MongoDump, OsFamily::Linux);
        assert!(rule_set.rules()[0].template().contains("database-tools"));
    }
}
