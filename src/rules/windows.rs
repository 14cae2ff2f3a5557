//! Windows rule tables
//!
//! Everything on Windows is a zip, and every bundled file carries the
//! ".exe" suffix. The archive name went through the same renames as macOS:
//! "mongodb-windows-*" since 4.4, "mongodb-win32-x86_64-2012plus" for 4.2
//! and "mongodb-win32-x86_64-2008plus-ssl" for the 3.x/4.0 era.

use super::{exact, pre, range, tools_exact, tools_range};
use crate::command::Command;
use crate::platform::{Architecture, OsFamily};
use crate::rule::{ArchiveType, FileSet, Rule};

fn server(file_set: &FileSet) -> Vec<Rule> {
    let modern = "/windows/mongodb-windows-x86_64-{version}.zip";
    vec![
        Rule::builder(OsFamily::Windows, Architecture::X64, modern)
            .archive(ArchiveType::Zip)
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
        Rule::builder(OsFamily::Windows, Architecture::X64, modern)
            .archive(ArchiveType::Zip)
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
            ])
            .file_set(file_set.clone())
            .build(),
        Rule::builder(
            OsFamily::Windows,
            Architecture::X64,
            "/win32/mongodb-win32-x86_64-2012plus-{version}.zip",
        )
        .archive(ArchiveType::Zip)
        .ranges([
            range((4, 2, 22), (4, 2, 24)),
            range((4, 2, 18), (4, 2, 19)),
            range((4, 2, 5), (4, 2, 16)),
            range((4, 2, 0), (4, 2, 3)),
        ])
        .file_set(file_set.clone())
        .build(),
        Rule::builder(
            OsFamily::Windows,
            Architecture::X64,
            "/win32/mongodb-win32-x86_64-2008plus-ssl-{version}.zip",
        )
        .archive(ArchiveType::Zip)
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
            OsFamily::Windows,
            Architecture::X64,
            "/win32/mongodb-win32-x86_64-{version}.zip",
        )
        .archive(ArchiveType::Zip)
        .ranges([range((2, 6, 0), (2, 6, 12))])
        .file_set(file_set.clone())
        .build(),
        // The last 32-bit Windows line.
        Rule::builder(
            OsFamily::Windows,
            Architecture::X86,
            "/win32/mongodb-win32-i386-{version}.zip",
        )
        .archive(ArchiveType::Zip)
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
            OsFamily::Windows,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-windows-x86_64-{tools.version}.zip",
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
    ]
}

/// Windows rules for one command, declaration order significant
pub(crate) fn rules(command: Command) -> Vec<Rule> {
    let file_set = FileSet::executable(command.executable_for(OsFamily::Windows));

    if command.is_tool() {
        let mut rules = tools(&file_set);
        rules.extend(server(&file_set));
        rules
    } else {
        server(&file_set)
    }
}
