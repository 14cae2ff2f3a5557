//! Generic Linux rule tables
//!
//! Two layers of last resort, always declared after the distro-specific
//! families. Platforms carrying no distro release get the ubuntu2004
//! archives, the broadest modern build. Below that sit the legacy generic
//! "linux" archives upstream published until 4.0; their rules use the
//! any-distro predicate, so a distro platform whose own family has no
//! archive for an old version still lands here.

use super::{pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::platform::{Architecture, OsFamily};
use crate::rule::{FileSet, Rule};

fn modern_fallback(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-ubuntu2004-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-ubuntu2004-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .no_distro()
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
                pre((4, 4, 24), "rc0"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .no_distro()
            .ranges([
                range((6, 0, 1), (6, 0, 8)),
                range((5, 0, 12), (5, 0, 19)),
                range((5, 0, 5), (5, 0, 6)),
                range((5, 0, 0), (5, 0, 2)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                range((4, 4, 0), (4, 4, 13)),
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .no_distro()
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
                pre((4, 4, 24), "rc0"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .no_distro()
            .ranges([
                range((6, 0, 1), (6, 0, 8)),
                range((5, 0, 12), (5, 0, 19)),
                range((5, 0, 5), (5, 0, 6)),
                range((5, 0, 0), (5, 0, 2)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                range((4, 4, 4), (4, 4, 13)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn legacy(file_set: &FileSet) -> Vec<Rule> {
    vec![
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/linux/mongodb-linux-x86_64-{version}.tgz",
        )
        .ranges([
            range((4, 0, 0), (4, 0, 28)),
            range((3, 6, 0), (3, 6, 23)),
            range((3, 4, 9), (3, 4, 24)),
            range((3, 4, 0), (3, 4, 7)),
            range((3, 2, 0), (3, 2, 22)),
            range((3, 0, 0), (3, 0, 15)),
            range((2, 6, 0), (2, 6, 12)),
        ])
        .file_set(file_set.clone())
        .build(),
        // 32-bit builds stopped with the 3.2 line.
        Rule::builder(
            OsFamily::Linux,
            Architecture::X86,
            "/linux/mongodb-linux-i686-{version}.tgz",
        )
        .ranges([
            range((3, 2, 0), (3, 2, 22)),
            range((3, 0, 0), (3, 0, 15)),
            range((2, 6, 0), (2, 6, 12)),
        ])
        .file_set(file_set.clone())
        .build(),
    ]
}

fn tools(file_set: &FileSet) -> Vec<Rule> {
    vec![
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-ubuntu2004-x86_64-{tools.version}.tgz",
        )
        .no_distro()
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
            tools_range((100, 5, 0), (100, 5, 4)),
            tools_range((100, 4, 0), (100, 4, 1)),
            tools_range((100, 3, 0), (100, 3, 1)),
            tools_range((100, 2, 0), (100, 2, 1)),
            tools_range((100, 1, 0), (100, 1, 1)),
            tools_range((100, 0, 0), (100, 0, 2)),
            tools_exact((99, 0, 0)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-ubuntu2004-arm64-{tools.version}.tgz",
        )
        .no_distro()
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
            tools_range((100, 5, 0), (100, 5, 4)),
        ])
        .file_set(file_set.clone())
        .build(),
    ]
}

/// Generic Linux rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        let mut rules = tools(&file_set);
        rules.extend(legacy(&file_set));
        rules
    } else {
        let mut rules = modern_fallback(&file_set);
        rules.extend(legacy(&file_set));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::{DistroVersion, UbuntuVersion};
    use crate::platform::Platform;
    use crate::version::Version;

    #[test]
    fn bare_linux_resolves_through_the_ubuntu2004_build() {
        let rules = rules(Command::Mongod);
        let bare = Platform::new(OsFamily::Linux, Architecture::X64);

        let matched = rules
            .iter()
            .find(|rule| rule.accepts(&bare, &Version::new(6, 0, 8)))
            .expect("modern fallback covers 6.0.8");
        assert!(matched.template().contains("ubuntu2004"));
    }

    #[test]
    fn modern_fallback_requires_an_unknown_distro() {
        let rules = rules(Command::Mongod);
        let ubuntu = Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu2004));

        // Distro platforms reach their own family tables instead; only the
        // legacy generic archives accept them here.
        for rule in &rules {
            if rule.accepts(&ubuntu, &Version::new(6, 0, 8)) {
                panic!("modern fallback must not accept a known distro");
            }
        }
    }

    #[test]
    fn legacy_archives_accept_any_distro() {
        let rules = rules(Command::Mongod);
        let debian9 = Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Debian(crate::distro::DebianVersion::Debian9));

        let matched = rules
            .iter()
            .find(|rule| rule.accepts(&debian9, &Version::new(2, 6, 12)))
            .expect("legacy archive covers 2.6.12");
        assert_eq!(matched.template(), "/linux/mongodb-linux-x86_64-{version}.tgz");
    }

    #[test]
    fn i686_only_gets_the_32_bit_lines() {
        let rules = rules(Command::Mongod);
        let x86 = Platform::new(OsFamily::Linux, Architecture::X86);

        assert!(rules.iter().any(|rule| rule.accepts(&x86, &Version::new(3, 2, 22))));
        assert!(!rules.iter().any(|rule| rule.accepts(&x86, &Version::new(3, 4, 0))));
    }
}
