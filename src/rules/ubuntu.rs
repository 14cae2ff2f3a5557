//! Ubuntu rule tables
//!
//! Archives exist for the 16.04, 18.04, 20.04 and 22.04 bases; interim
//! releases reuse the most recent LTS build. The aarch64 lists are shorter
//! than the x86_64 ones where upstream never shipped an ARM build.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::distro::{DebianVersion, DistroVersion, UbuntuVersion};
use crate::platform::{Architecture, OsFamily};
use crate::range::VersionRange;
use crate::rule::{FileSet, Rule};

fn on(base: UbuntuVersion) -> Vec<DistroVersion> {
    DistroVersion::Ubuntu(base).and_newer()
}

fn server_ubuntu2204(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-ubuntu2204-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-ubuntu2204-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu2204))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc10"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu2204))
            .ranges([range((6, 0, 4), (6, 0, 8))])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(UbuntuVersion::Ubuntu2204))
            .ranges([
                pre((7, 0, 0), "rc8"),
                pre((7, 0, 0), "rc2"),
                range((6, 3, 1), (6, 3, 2)),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(UbuntuVersion::Ubuntu2204))
            .ranges([range((6, 0, 4), (6, 0, 8))])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_ubuntu2004(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-ubuntu2004-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-ubuntu2004-{version}.tgz";
    // No debian11 archive exists for these older releases; Debian 11 and 12
    // take the 20.04 build for them.
    let x64_with_debian: Vec<DistroVersion> = on(UbuntuVersion::Ubuntu2004)
        .into_iter()
        .chain([
            DistroVersion::Debian(DebianVersion::Debian11),
            DistroVersion::Debian(DebianVersion::Debian12),
        ])
        .collect();
    let stable_arm = [
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
    ];
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu2004))
            .ranges([
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((6, 0, 9), "rc1"),
                pre((5, 0, 20), "rc1"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu2004))
            .ranges([
                exact((6, 0, 8)),
                range((6, 0, 1), (6, 0, 6)),
                range((5, 0, 18), (5, 0, 19)),
                range((5, 0, 12), (5, 0, 15)),
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(x64_with_debian)
            .ranges([
                range((5, 0, 5), (5, 0, 6)),
                range((5, 0, 0), (5, 0, 2)),
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                exact((4, 4, 13)),
                exact((4, 4, 11)),
                range((4, 4, 0), (4, 4, 9)),
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(UbuntuVersion::Ubuntu2004))
            .ranges([
                pre((7, 0, 0), "rc2"),
                pre((7, 0, 0), "rc1"),
                range((6, 3, 1), (6, 3, 2)),
                pre((5, 0, 20), "rc1"),
            ])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(UbuntuVersion::Ubuntu2004))
            .ranges(stable_arm)
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_ubuntu1804(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-ubuntu1804-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-ubuntu1804-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu1804))
            .ranges([pre((5, 0, 20), "rc1"), pre((4, 4, 24), "rc0")])
            .file_set(file_set.clone())
            .dev()
            .build(),
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu1804))
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
                range((4, 0, 1), (4, 0, 28)),
                range((3, 6, 20), (3, 6, 23)),
            ])
            .file_set(file_set.clone())
            .build(),
        // No 3.x/4.0 aarch64 builds ever existed for 18.04.
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros(on(UbuntuVersion::Ubuntu1804))
            .ranges([
                range((4, 4, 22), (4, 4, 23)),
                range((4, 4, 16), (4, 4, 19)),
                exact((4, 4, 13)),
                exact((4, 4, 11)),
                range((4, 4, 0), (4, 4, 9)),
                range((4, 2, 22), (4, 2, 24)),
                range((4, 2, 18), (4, 2, 19)),
                range((4, 2, 5), (4, 2, 16)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn server_ubuntu1604(file_set: &FileSet) -> Vec<Rule> {
    let x64 = "/linux/mongodb-linux-x86_64-ubuntu1604-{version}.tgz";
    let arm = "/linux/mongodb-linux-aarch64-ubuntu1604-{version}.tgz";
    vec![
        Rule::builder(OsFamily::Linux, Architecture::X64, x64)
            .distros(on(UbuntuVersion::Ubuntu1604))
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
                range((3, 2, 7), (3, 2, 22)),
            ])
            .file_set(file_set.clone())
            .build(),
        // The aarch64 line for this base ends before 18.04; from 4.2 on,
        // 18.04 has its own ARM archives.
        Rule::builder(OsFamily::Linux, Architecture::Arm64, arm)
            .distros([
                DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1604),
                DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1610),
                DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1704),
                DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1710),
            ])
            .ranges([
                range((4, 0, 0), (4, 0, 28)),
                range((3, 6, 0), (3, 6, 23)),
                range((3, 4, 9), (3, 4, 24)),
            ])
            .file_set(file_set.clone())
            .build(),
    ]
}

fn tools(file_set: &FileSet) -> Vec<Rule> {
    let recent: [VersionRange; 2] = [
        tools_range((100, 7, 0), (100, 7, 4)),
        tools_range((100, 6, 0), (100, 6, 1)),
    ];
    let full: [VersionRange; 9] = [
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
            "/tools/db/mongodb-database-tools-ubuntu2204-x86_64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu2204))
        .ranges(recent.clone())
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-ubuntu2204-arm64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu2204))
        .ranges(recent)
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-ubuntu2004-x86_64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu2004))
        .ranges([
            tools_range((100, 7, 0), (100, 7, 4)),
            tools_range((100, 6, 0), (100, 6, 1)),
            tools_range((100, 5, 0), (100, 5, 4)),
            tools_range((100, 4, 0), (100, 4, 1)),
            tools_range((100, 3, 0), (100, 3, 1)),
            tools_range((100, 2, 0), (100, 2, 1)),
            tools_range((100, 1, 0), (100, 1, 1)),
            tools_range((100, 0, 0), (100, 0, 2)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::Arm64,
            "/tools/db/mongodb-database-tools-ubuntu2004-arm64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu2004))
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
            "/tools/db/mongodb-database-tools-ubuntu1804-x86_64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu1804))
        .ranges(full.clone())
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-ubuntu1604-x86_64-{tools.version}.tgz",
        )
        .distros(on(UbuntuVersion::Ubuntu1604))
        .ranges([
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
    ]
}

/// Ubuntu rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable());

    if command.is_tool() {
        // Pre-100.x tools shipped inside the server archives of the 18.04
        // and 16.04 era.
        let mut rules = tools(&file_set);
        rules.extend(server_ubuntu1804(&file_set));
        rules.extend(server_ubuntu1604(&file_set));
        rules
    } else {
        let mut rules = server_ubuntu2204(&file_set);
        rules.extend(server_ubuntu2004(&file_set));
        rules.extend(server_ubuntu1804(&file_set));
        rules.extend(server_ubuntu1604(&file_set));
        rules
    }
}
