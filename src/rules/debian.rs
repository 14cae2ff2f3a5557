//! Debian rule tables
//!
//! Archives exist for Debian 9.2 ("debian92"), 10 and 11 bases; Debian 12
//! reuses the Debian 11 builds. Tool commands resolve through the
//! database-tools tables first and fall back to the Debian 10/9 server
//! archives that still bundled the tools.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::distro::{DebianVersion, DistroVersion};
use crate::platform::{Architecture, OsFamily};
use crate::range::VersionRange;
use crate::rule::{FileSet, Rule};

fn on(base: DebianVersion) -> Vec<DistroVersion> {
    DistroVersion::Debian(base).and_newer()
}

fn server_debian11(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-debian11-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian11))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc10"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian11))
            .ranges([
                exact((6, 0, 8)),
                range((6, 0, 1), (6, 0, 6)),
                range((5, 0, 18), (5, 0, 19)),
                range((5, 0, 12), (5, 0, 15)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_debian10(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-debian10-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian10))
            .ranges([
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
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian10))
            .ranges([
                exact((6, 0, 8)),
                range((6, 0, 1), (6, 0, 6)),
                range((5, 0, 18), (5, 0, 19)),
                range((5, 0, 12), (5, 0, 15)),
                range((5, 0, 5), (5, 0, 6)),
                range((5, 0, 0), (5, 0, 2)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                exact((4, 4, 13)),
                exact((4, 4, 11)),
                range((4, 4, 0), (4, 4, 9)),
                range((4, 2, 22), (4, 2, 24)),
                range((4, 2, 18), (4, 2, 19)),
                range((4, 2, 5), (4, 2, 16)),
                range((4, 2, 1), (4, 2, 3)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_debian9(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-debian92-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian9))
            .ranges([pre((5, 0, 20), "rc1"), pre((4, 4, 24), "rc0")])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(DebianVersion::Debian9))
            .ranges([
                range((5, 0, 18), (5, 0, 19)),
                range((5, 0, 12), (5, 0, 15)),
                range((5, 0, 5), (5, 0, 6)),
                range((5, 0, 0), (5, 0, 2)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                exact((4, 4, 13)),
                exact((4, 4, 11)),
                range((4, 4, 0), (4, 4, 9)),
                range((4, 2, 22), (4, 2, 24)),
                range((4, 2, 18), (4, 2, 19)),
                range((4, 2, 5), (4, 2, 16)),
                range((4, 2, 0), (4, 2, 3)),
                range((4, 0, 0), (4, 0, 28)),
                range((3, 6, 5), (3, 6, 23)),
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
            "/tools/db/mongodb-database-tools-debian11-x86_64-{tools.version}.tgz",
        )
        .distros(on(DebianVersion::Debian11))
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
            tools_range((100, 5, 3), (100, 5, 4)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-debian10-x86_64-{tools.version}.tgz",
        )
        .distros(on(DebianVersion::Debian10))
        .ranges(tools_full_line())
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-debian92-x86_64-{tools.version}.tgz",
        )
        .distros(on(DebianVersion::Debian9))
        .ranges(tools_full_line())
        .file_set(file_set.clone())
        .build(),
    ]
}

fn tools_full_line() -> Vec<VersionRange> {
    vec![
        tools_range((100, 7, 0), (100, 7, 4)),
        tools_range((100, 6, 0), (100, 6, 1)),
        tools_range((100, 5, 0), (100, 5, 4)),
        tools_range((100, 4, 0), (100, 4, 1)),
        tools_range((100, 3, 0), (100, 3, 1)),
        tools_range((100, 2, 0), (100, 2, 1)),
        tools_range((100, 1, 0), (100, 1, 1)),
        tools_range((100, 0, 0), (100, 0, 2)),
        tools_exact((99, 0, 0)),
    ]
}

/// Debian rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        // Older server archives bundled the tools, but only up to the
        // Debian 10 era; the debian11 builds never did.
        let mut rules = tools(&file_set);
        rules.extend(server_debian10(&file_set));
        rules.extend(server_debian9(&file_set));
        rules
    } else {
        let mut rules = server_debian11(&file_set);
        rules.extend(server_debian10(&file_set));
        rules.extend(server_debian9(&file_set));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    #[test]
    fn debian12_reuses_debian11_archives() {
        let rules = rules(Command::Mongod);
        let debian12 = crate::platform::Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Debian(DebianVersion::Debian12));

        let matched = rules
            .iter()
            .find(|rule| rule.accepts(&debian12, &Version::new(6, 0, 8)))
            .expect("debian 12 should reuse a debian 11 build");
        assert!(matched.template().contains("debian11"));
    }

    #[test]
    fn debian9_never_uses_newer_archives() {
        let rules = rules(Command::Mongod);
        let debian9 = crate::platform::Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Debian(DebianVersion::Debian9));

        for rule in &rules {
            if rule.accepts(&debian9, &Version::new(5, 0, 2)) {
                assert!(rule.template().contains("debian92"));
            }
        }
    }
}
