//! Amazon Linux rule tables
//!
//! Upstream treats the three Amazon Linux generations as unrelated targets:
//! an archive built for "amazon2" is never offered to Amazon Linux 2023 or
//! the original Amazon Linux, so every rule here names exactly one release.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::distro::{AmazonVersion, DistroVersion};
use crate::platform::{Architecture, OsFamily};
use crate::rule::{FileSet, Rule};

fn only(release: AmazonVersion) -> Vec<DistroVersion> {
    vec![DistroVersion::Amazon(release)]
}

fn server_amazon2023(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-amazon2023-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-amazon2023-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(only(AmazonVersion::AmazonLinux2023))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(only(AmazonVersion::AmazonLinux2023))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
    ]
}

fn server_amazon2(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-amazon2-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-amazon2-{version}.tgz";
    vec![
        // The 6.3.2 x86_64 build was pulled; only the ARM one shipped.
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(only(AmazonVersion::AmazonLinux2))
            .ranges([
                exact((6, 3, 1)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
                pre((4, 4, 24), "rc0"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(only(AmazonVersion::AmazonLinux2))
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
                range((4, 0, 0), (4, 0, 28)),
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(only(AmazonVersion::AmazonLinux2))
            .ranges([
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
                pre((4, 4, 24), "rc0"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(only(AmazonVersion::AmazonLinux2))
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
                range((4, 4, 4), (4, 4, 9)),
                range((4, 2, 22), (4, 2, 24)),
                range((4, 2, 18), (4, 2, 19)),
                range((4, 2, 13), (4, 2, 16)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_amazon(file_set: &FileSet) -> Vec<Rule> {
    let template = "/linux/mongodb-linux-x86_64-amazon-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(only(AmazonVersion::AmazonLinux))
            .ranges([pre((5, 0, 20), "rc1"), pre((4, 4, 24), "rc0")])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, template)
            .distros(only(AmazonVersion::AmazonLinux))
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
            "/tools/db/mongodb-database-tools-amazon2023-x86_64-{tools.version}.tgz",
        )
        .distros(only(AmazonVersion::AmazonLinux2023))
        .ranges([tools_range((100, 7, 0), (100, 7, 4))])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-amazon2023-arm64-{tools.version}.tgz",
        )
        .distros(only(AmazonVersion::AmazonLinux2023))
        .ranges([tools_range((100, 7, 0), (100, 7, 4))])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-amazon2-x86_64-{tools.version}.tgz",
        )
        .distros(only(AmazonVersion::AmazonLinux2))
        .ranges(full.clone())
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-amazon2-arm64-{tools.version}.tgz",
        )
        .distros(only(AmazonVersion::AmazonLinux2))
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
            "/tools/db/mongodb-database-tools-amazon-x86_64-{tools.version}.tgz",
        )
        .distros(only(AmazonVersion::AmazonLinux))
        .ranges(full)
        .file_set(file_set.clone())
        .build(),
    ]
}

/// Amazon Linux rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        let mut rules = tools(&file_set);
        rules.extend(server_amazon2(&file_set));
        rules.extend(server_amazon(&file_set));
        rules
    } else {
        let mut rules = server_amazon2023(&file_set);
        rules.extend(server_amazon2(&file_set));
        rules.extend(server_amazon(&file_set));
        rules
    }
}
