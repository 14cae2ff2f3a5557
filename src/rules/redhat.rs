//! RHEL-family rule tables
//!
//! Upstream builds against RHEL bases ("rhel62", "rhel70", "rhel80",
//! "rhel90", ARM "rhel82"); CentOS, Oracle Linux and Fedora platforms reach
//! these rules through the compatibility aliases at matching majors. Each
//! rule additionally lists the newer RHEL releases known to run the build.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::distro::{DistroVersion, RedhatVersion};
use crate::platform::{Architecture, OsFamily};
use crate::rule::{FileSet, Rule};

fn on(base: RedhatVersion) -> Vec<DistroVersion> {
    DistroVersion::Redhat(base).and_newer()
}

fn server_rhel90(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-rhel90-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(RedhatVersion::Redhat9))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(RedhatVersion::Redhat9))
            .ranges([range((6, 0, 4), (6, 0, 8))])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_rhel80(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-rhel80-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-rhel82-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(RedhatVersion::Redhat8))
            .ranges([
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
                pre((4, 4, 24), "rc0"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(RedhatVersion::Redhat8))
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
        // ARM builds start with the rhel82 base.
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(RedhatVersion::Redhat8))
            .ranges([range((6, 3, 1), (6, 3, 2))])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(RedhatVersion::Redhat8))
            .ranges([
                exact((6, 0, 8)),
                range((6, 0, 1), (6, 0, 6)),
                range((5, 0, 18), (5, 0, 19)),
                range((5, 0, 12), (5, 0, 15)),
                range((5, 0, 5), (5, 0, 6)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                range((4, 4, 4), (4, 4, 9)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_rhel70(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-rhel70-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(RedhatVersion::Redhat7))
            .ranges([pre((5, 0, 20), "rc1"), pre((4, 4, 24), "rc0")])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(RedhatVersion::Redhat7))
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
                range((3, 6, 0), (3, 6, 23)),
                range((3, 4, 9), (3, 4, 24)),
                range((3, 4, 0), (3, 4, 7)),
                range((3, 2, 0), (3, 2, 22)),
                range((3, 0, 0), (3, 0, 15)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_rhel62(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-rhel62-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(on(RedhatVersion::Redhat6))
            .ranges([
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
                range((3, 6, 0), (3, 6, 23)),
                range((3, 4, 9), (3, 4, 24)),
                range((3, 4, 0), (3, 4, 7)),
                range((3, 2, 0), (3, 2, 22)),
                range((3, 0, 0), (3, 0, 15)),
                range((2, 6, 0), (2, 6, 12)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn tools(file_set: &FileSet) -> Vec<Rule> {
    let full = [
        tools_range((100, 7, 0), (100, 7, 4)),
        tools_range((100, 6, 0), (100, 6, 1)),
        tools_range((100, 5, 0), (100, 5, 4)),
        tools_range((100, 4, 0), (100, 4, 1)),
        tools_range((100, 3, 0), (100, 3, 1)),
        tools_range((100, 2, 0), (100, 2, 1)),
        tools_range((100, 1, 0), (100, 1, 1)),
        tools_range((100, 0, 0), (100, 0, 2)),
        tools_exact((99, 0, 0)),
    ];
    vec![
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-rhel90-x86_64-{tools.version}.tgz",
        )
        .distros(on(RedhatVersion::Redhat9))
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-rhel80-x86_64-{tools.version}.tgz",
        )
        .distros(on(RedhatVersion::Redhat8))
        .ranges(full.clone())
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-rhel82-arm64-{tools.version}.tgz",
        )
        .distros(on(RedhatVersion::Redhat8))
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
            tools_range((100, 5, 0), (100, 5, 4)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-rhel70-x86_64-{tools.version}.tgz",
        )
        .distros(on(RedhatVersion::Redhat7))
        .ranges(full)
        .file_set(file_set.clone())
        .build(),
    ]
}

/// RHEL-family rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        let mut rules = tools(&file_set);
        rules.extend(server_rhel70(&file_set));
        rules.extend(server_rhel62(&file_set));
        rules
    } else {
        let mut rules = server_rhel90(&file_set);
        rules.extend(server_rhel80(&file_set));
        rules.extend(server_rhel70(&file_set));
        rules.extend(server_rhel62(&file_set));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::version::Version;

    fn redhat(release: RedhatVersion) -> Platform {
        Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Redhat(release))
    }

    #[test]
    fn rhel7_prefers_its_own_base_over_rhel62() {
        let rules = rules(Command::Mongod);
        let matched = rules
            .iter()
            .find(|rule| rule.accepts(&redhat(RedhatVersion::Redhat7), &Version::new(4, 4, 9)))
            .expect("rhel70 build exists for 4.4.9");
        assert!(matched.template().contains("rhel70"));
    }

    #[test]
    fn rhel6_only_matches_the_rhel62_base() {
        let rules = rules(Command::Mongod);
        for rule in &rules {
            if rule.accepts(&redhat(RedhatVersion::Redhat6), &Version::new(4, 4, 9)) {
                assert!(rule.template().contains("rhel62"));
            }
        }
    }
}
