//! macOS rule tables
//!
//! Upstream renamed the archives twice: "mongodb-macos-*" since 4.2,
//! "mongodb-osx-ssl-*" for the 3.x/4.0 era and plain "mongodb-osx-*"
//! before that. Apple-silicon archives start with 6.0. The database tools
//! ship as zip archives on macOS, unlike every Linux target.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::platform::{Architecture, OsFamily};
use crate::rule::{ArchiveType, FileSet, Rule};

fn server_x64(file_set: &FileSet) -> Vec<Rule> {
    let modern = "/osx/mongodb-macos-x86_64-{version}.tgz";
    vec![
        Rule::builder(OsFamily::MacOs, Architecture::X64, modern)
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
        Rule::builder(OsFamily::MacOs, Architecture::X64, modern)
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
                range((4, 2, 0), (4, 2, 3)),
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(
            OsFamily::MacOs,
            Architecture::X64,
            "/osx/mongodb-osx-ssl-x86_64-{version}.tgz",
        )
        .ranges([
            range((4, 0, 0), (4, 0, 28)),
            range((3, 6, 0), (3, 6, 23)),
            range((3, 4, 9), (3, 4, 24)),
            range((3, 4, 0), (3, 4, 7)),
            range((3, 2, 0), (3, 2, 22)),
            range((3, 0, 0), (3, 0, 15)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::MacOs,
            Architecture::X64,
            "/osx/mongodb-osx-x86_64-{version}.tgz",
        )
        .ranges([range((2, 6, 0), (2, 6, 12))])
        .file_set(file_set.clone())
        .build(),
    ]
}

fn server_arm(file_set: &FileSet) -> Vec<Rule> {
    let template = "/osx/mongodb-macos-arm64-{version}.tgz";
    vec![
        Rule::builder(OsFamily::MacOs, Architecture::Arm64, template)
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::MacOs, Architecture::Arm64, template)
            .ranges([exact((6, 0, 8)), range((6, 0, 1), (6, 0, 6))])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn tools(file_set: &FileSet) -> Vec<Rule> {
    vec![
        Rule::builder(
            OsFamily::MacOs,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-macos-x86_64-{tools.version}.zip",
        )
        .archive(ArchiveType::Zip)
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
            OsFamily::MacOs,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-macos-arm64-{tools.version}.zip",
        )
        .archive(ArchiveType::Zip)
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
        ])
        .file_set(file_set.clone())
        .build(),
    ]
}

/// macOS rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        // Server archives bundled the tools until the 4.4 rename era.
        let mut rules = tools(&file_set);
        rules.extend(server_x64(&file_set));
        rules
    } else {
        let mut rules = server_x64(&file_set);
        rules.extend(server_arm(&file_set));
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::version::Version;

    #[test]
    fn the_archive_rename_eras_do_not_overlap() {
        let rules = rules(Command::Mongod);
        let platform = Platform::new(OsFamily::MacOs, Architecture::X64);

        let modern = rules
            .iter()
            .find(|rule| rule.accepts(&platform, &Version::new(4, 2, 3)))
            .expect("4.2.3 archive");
        assert!(modern.template().contains("mongodb-macos-x86_64"));

        let ssl_era = rules
            .iter()
            .find(|rule| rule.accepts(&platform, &Version::new(4, 0, 28)))
            .expect("4.0.28 archive");
        assert!(ssl_era.template().contains("mongodb-osx-ssl-x86_64"));

        let oldest = rules
            .iter()
            .find(|rule| rule.accepts(&platform, &Version::new(2, 6, 12)))
            .expect("2.6.12 archive");
        assert!(oldest.template().contains("mongodb-osx-x86_64"));
    }

    #[test]
    fn apple_silicon_starts_at_6() {
        let rules = rules(Command::Mongod);
        let arm = Platform::new(OsFamily::MacOs, Architecture::Arm64);

        assert!(rules.iter().any(|rule| rule.accepts(&arm, &Version::new(6, 0, 4))));
        assert!(!rules.iter().any(|rule| rule.accepts(&arm, &Version::new(5, 0, 2))));
    }

    #[test]
    fn tools_ship_as_zip() {
        let rules = rules(Command::MongoDump);
        let platform = Platform::new(OsFamily::MacOs, Architecture::X64);

        let matched = rules
            .iter()
            .find(|rule| rule.accepts(&platform, &Version::tools(100, 7, 2)))
            .expect("tools archive");
        let package = matched.package(&Version::tools(100, 7, 2)).unwrap();
        assert_eq!(package.archive, ArchiveType::Zip);
        assert!(package.path.ends_with("macos-x86_64-100.7.2.zip"));
    }
}
