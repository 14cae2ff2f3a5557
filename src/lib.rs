//! Mongodl internal library code

/// Default download mirror (CDN) base URL
pub const DEFAULT_MIRROR: &str = "https://fastdl.mongodb.org";

/// Get the mirror base URL to use for download links.
/// Priority: `MONGODL_MIRROR` env var -> `DEFAULT_MIRROR` constant.
#[must_use]
pub fn mirror_url() -> String {
    env_vars::mirror().unwrap_or_else(|| DEFAULT_MIRROR.to_string())
}

pub mod command;
pub mod compat;
pub mod debug;
pub mod distro;
pub mod env_vars;
pub mod platform;
pub mod range;
pub mod resolver;
pub mod rule;
pub mod rules;
pub mod version;

// Re-export common types for convenience
pub use command::{Command, UnknownCommand};
pub use compat::expand;
pub use debug::{init_debug, is_debug_enabled};
pub use distro::{
    AmazonVersion, CentosVersion, DebianVersion, Distro, DistroVersion, FedoraVersion,
    LinuxMintVersion, OracleVersion, PopOsVersion, RedhatVersion, UbuntuVersion,
    UnknownDistroVersion,
};
pub use platform::{Architecture, BitSize, OsFamily, Platform, UnknownPlatformName};
pub use range::VersionRange;
pub use resolver::{PackageResolver, Resolution, RuleSet, Unsupported, resolve};
pub use rule::{
    ArchiveType, DistroPredicate, FileSet, FileSetEntry, FileType, Package, Rule, RuleBuilder,
    TemplateError,
};
pub use version::{Version, VersionError, VersionKind};
