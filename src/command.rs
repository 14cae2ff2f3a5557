//! Logical commands the resolver can find archives for
//!
//! Each command maps to one executable inside a download archive. Server
//! commands live in the server tarballs and are versioned on the product
//! axis; the dump/restore/import tools moved into the separately versioned
//! database-tools archives with the 100.x line.

use crate::platform::OsFamily;
use crate::version::VersionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named executable tool that download archives provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Database server
    Mongod,
    /// Sharding router
    Mongos,
    /// Interactive shell
    Mongo,
    MongoDump,
    MongoRestore,
    MongoImport,
}

impl Command {
    /// Every supported command
    pub const ALL: &'static [Self] = &[
        Self::Mongod,
        Self::Mongos,
        Self::Mongo,
        Self::MongoDump,
        Self::MongoRestore,
        Self::MongoImport,
    ];

    /// Name of the executable inside the archive, without any OS suffix
    #[inline]
    pub const fn executable(self) -> &'static str {
        match self {
            Self::Mongod => "mongod",
            Self::Mongos => "mongos",
            Self::Mongo => "mongo",
            Self::MongoDump => "mongodump",
            Self::MongoRestore => "mongorestore",
            Self::MongoImport => "mongoimport",
        }
    }

    /// Executable file name for an OS family (".exe" suffix on Windows)
    #[must_use]
    pub fn executable_for(self, os: OsFamily) -> String {
        match os {
            OsFamily::Windows => format!("{}.exe", self.executable()),
            OsFamily::Linux | OsFamily::MacOs => self.executable().to_string(),
        }
    }

    /// Whether this command ships in the database-tools archives
    #[inline]
    pub const fn is_tool(self) -> bool {
        matches!(self, Self::MongoDump | Self::MongoRestore | Self::MongoImport)
    }

    /// The version axis requests for this command are usually made on.
    ///
    /// Tool commands still accept product versions for the old releases
    /// that bundled the tools inside the server archive; this is only the
    /// default used when parsing a version string for the command.
    #[inline]
    pub const fn version_kind(self) -> VersionKind {
        if self.is_tool() {
            VersionKind::Tools
        } else {
            VersionKind::Product
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Error returned when a command name is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command '{0}', expected one of: mongod, mongos, mongo, mongodump, mongorestore, mongoimport")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().trim() {
            "mongod" => Ok(Self::Mongod),
            "mongos" => Ok(Self::Mongos),
            "mongo" => Ok(Self::Mongo),
            "mongodump" => Ok(Self::MongoDump),
            "mongorestore" => Ok(Self::MongoRestore),
            "mongoimport" => Ok(Self::MongoImport),
            _ => Err(UnknownCommand(name.to_string())),
        }
    }
}
