//! Resolution rules and the artifact descriptors they bind
//!
//! A [`Rule`] pairs a platform predicate (OS family, architecture, accepted
//! distro releases) and a version predicate (a disjunction of inclusive
//! ranges) with the archive that serves the match: URL template, archive
//! type, in-archive file layout and a dev flag for pre-release builds.
//! Rules are immutable once built and match against the *unexpanded*
//! platform they are handed; compatibility expansion happens in the
//! resolver, never here.

use crate::distro::DistroVersion;
use crate::platform::{Architecture, OsFamily, Platform};
use crate::range::VersionRange;
use crate::version::{Version, VersionKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Archive container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveType {
    TarGz,
    Zip,
}

impl ArchiveType {
    /// Conventional file extension for this archive type
    #[inline]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::TarGz => "tgz",
            Self::Zip => "zip",
        }
    }
}

/// Role of a file inside an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Executable,
    Library,
    Support,
}

/// One expected file inside an archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSetEntry {
    /// File name within the archive (directories vary per release and are
    /// not part of the layout)
    pub name: String,
    pub file_type: FileType,
}

impl FileSetEntry {
    /// Whether this entry must carry the executable bit after extraction
    #[inline]
    pub const fn is_executable(&self) -> bool {
        matches!(self.file_type, FileType::Executable)
    }
}

/// Expected file layout of an archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    pub entries: Vec<FileSetEntry>,
}

impl FileSet {
    /// Layout containing a single executable with the given name
    #[must_use]
    pub fn executable(name: impl Into<String>) -> Self {
        Self {
            entries: vec![FileSetEntry {
                name: name.into(),
                file_type: FileType::Executable,
            }],
        }
    }
}

/// Distro clause of a rule's platform predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistroPredicate {
    /// Matches with or without a distro release (last-resort rules)
    Any,
    /// Matches only platforms that carry no distro release
    Absent,
    /// Matches exactly the listed releases
    OneOf(Vec<DistroVersion>),
}

impl DistroPredicate {
    fn matches(&self, distro_version: Option<DistroVersion>) -> bool {
        match self {
            Self::Any => true,
            Self::Absent => distro_version.is_none(),
            Self::OneOf(accepted) => distro_version.is_some_and(|v| accepted.contains(&v)),
        }
    }
}

/// Error raised when a matched rule's URL template cannot be rendered.
///
/// This signals a defect in the rule tables (a template asking for a
/// version axis the request does not carry), not a normal resolution miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{template}' requires a {expected} version but got {kind} version {version}")]
    KindMismatch {
        template: String,
        expected: VersionKind,
        kind: VersionKind,
        version: String,
    },
    #[error("template '{template}' contains an unsupported placeholder")]
    UnknownPlaceholder { template: String },
}

/// A fully resolved download artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// URL path below the download mirror, version already substituted
    pub path: String,
    pub archive: ArchiveType,
    pub file_set: FileSet,
    /// Whether the archive is a pre-release/dev build
    pub pre_release: bool,
}

impl Package {
    /// Full download URL under the given mirror base
    #[must_use]
    pub fn download_url(&self, mirror: &str) -> String {
        format!("{}{}", mirror.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Declarative binding of a platform/version predicate to an archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    os: OsFamily,
    architecture: Architecture,
    distros: DistroPredicate,
    versions: Vec<VersionRange>,
    template: String,
    archive: ArchiveType,
    file_set: FileSet,
    dev: bool,
}

impl Rule {
    /// Start building a rule for one OS family, architecture and URL
    /// template
    #[must_use]
    pub fn builder(
        os: OsFamily,
        architecture: Architecture,
        template: impl Into<String>,
    ) -> RuleBuilder {
        RuleBuilder {
            rule: Self {
                os,
                architecture,
                distros: DistroPredicate::Any,
                versions: Vec::new(),
                template: template.into(),
                archive: ArchiveType::TarGz,
                file_set: FileSet::default(),
                dev: false,
            },
        }
    }

    /// Whether this rule applies to (platform, version).
    ///
    /// Every platform clause must hold against the platform as passed in,
    /// and at least one version range must match.
    #[must_use]
    pub fn accepts(&self, platform: &Platform, version: &Version) -> bool {
        self.os == platform.os
            && self.architecture == platform.architecture
            && self.distros.matches(platform.distro_version)
            && self.versions.iter().any(|range| range.matches(version))
    }

    /// Render the artifact descriptor for a version this rule accepted
    pub fn package(&self, version: &Version) -> Result<Package, TemplateError> {
        let path = render_template(&self.template, version)?;
        Ok(Package {
            path,
            archive: self.archive,
            file_set: self.file_set.clone(),
            pre_release: self.dev || version.is_pre_release(),
        })
    }

    /// The URL template this rule binds
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether this rule serves dev/pre-release builds
    #[inline]
    pub const fn is_dev(&self) -> bool {
        self.dev
    }
}

fn render_template(template: &str, version: &Version) -> Result<String, TemplateError> {
    let placeholder_kind = if template.contains("{tools.version}") {
        VersionKind::Tools
    } else if template.contains("{version}") {
        VersionKind::Product
    } else {
        return Err(TemplateError::UnknownPlaceholder {
            template: template.to_string(),
        });
    };

    if version.kind != placeholder_kind {
        return Err(TemplateError::KindMismatch {
            template: template.to_string(),
            expected: placeholder_kind,
            kind: version.kind,
            version: version.to_string(),
        });
    }

    let rendered = match placeholder_kind {
        VersionKind::Product => template.replace("{version}", &version.to_string()),
        VersionKind::Tools => template.replace("{tools.version}", &version.to_string()),
    };

    if rendered.contains('{') {
        return Err(TemplateError::UnknownPlaceholder {
            template: template.to_string(),
        });
    }
    Ok(rendered)
}

/// Incremental construction of an immutable [`Rule`]
#[derive(Debug)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    /// Restrict the rule to the listed distro releases
    #[must_use]
    pub fn distros(mut self, releases: impl IntoIterator<Item = DistroVersion>) -> Self {
        self.rule.distros = DistroPredicate::OneOf(releases.into_iter().collect());
        self
    }

    /// Restrict the rule to platforms without a distro release
    #[must_use]
    pub fn no_distro(mut self) -> Self {
        self.rule.distros = DistroPredicate::Absent;
        self
    }

    /// Add one version range to the predicate disjunction
    #[must_use]
    pub fn range(mut self, range: VersionRange) -> Self {
        self.rule.versions.push(range);
        self
    }

    /// Add several version ranges to the predicate disjunction
    #[must_use]
    pub fn ranges(mut self, ranges: impl IntoIterator<Item = VersionRange>) -> Self {
        self.rule.versions.extend(ranges);
        self
    }

    /// Set the archive container format (tar.gz when unset)
    #[must_use]
    pub fn archive(mut self, archive: ArchiveType) -> Self {
        self.rule.archive = archive;
        self
    }

    /// Set the expected file layout
    #[must_use]
    pub fn file_set(mut self, file_set: FileSet) -> Self {
        self.rule.file_set = file_set;
        self
    }

    /// Mark the rule as serving dev/pre-release builds
    #[must_use]
    pub fn dev(mut self) -> Self {
        self.rule.dev = true;
        self
    }

    /// Finish the rule
    #[must_use]
    pub fn build(self) -> Rule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distro::DebianVersion;

    fn debian_rule() -> Rule {
        Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/linux/mongodb-linux-x86_64-debian92-{version}.tgz",
        )
        .distros([DistroVersion::Debian(DebianVersion::Debian9)])
        .range(VersionRange::new(Version::new(5, 0, 0), Version::new(5, 0, 2)))
        .file_set(FileSet::executable("mongod"))
        .build()
    }

    #[test]
    fn accepts_requires_every_platform_clause() {
        let rule = debian_rule();
        let version = Version::new(5, 0, 1);

        let matching = Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Debian(DebianVersion::Debian9));
        assert!(rule.accepts(&matching, &version));

        let wrong_arch = Platform::new(OsFamily::Linux, Architecture::Arm64)
            .with_distro_version(DistroVersion::Debian(DebianVersion::Debian9));
        assert!(!rule.accepts(&wrong_arch, &version));

        // Expansion is the resolver's job: Debian 10 is not in the declared
        // set, so the unexpanded platform must not match.
        let newer_debian = Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Debian(DebianVersion::Debian10));
        assert!(!rule.accepts(&newer_debian, &version));

        let no_distro = Platform::new(OsFamily::Linux, Architecture::X64);
        assert!(!rule.accepts(&no_distro, &version));
    }

    #[test]
    fn package_substitutes_the_version() {
        let package = debian_rule().package(&Version::new(5, 0, 2)).unwrap();
        assert_eq!(package.path, "/linux/mongodb-linux-x86_64-debian92-5.0.2.tgz");
        assert_eq!(package.archive, ArchiveType::TarGz);
        assert!(!package.pre_release);
        assert_eq!(
            package.download_url("https://fastdl.mongodb.org"),
            "https://fastdl.mongodb.org/linux/mongodb-linux-x86_64-debian92-5.0.2.tgz"
        );
    }

    #[test]
    fn tools_template_rejects_product_versions() {
        let rule = Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/tools/db/mongodb-database-tools-debian10-x86_64-{tools.version}.tgz",
        )
        .range(VersionRange::exact(Version::tools(100, 7, 2)))
        .build();

        assert!(rule.package(&Version::tools(100, 7, 2)).is_ok());
        assert!(matches!(
            rule.package(&Version::new(100, 7, 2)),
            Err(TemplateError::KindMismatch { .. })
        ));
    }

    #[test]
    fn unknown_placeholders_are_rejected() {
        let rule = Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/linux/mongodb-{edition}-{version}.tgz",
        )
        .range(VersionRange::exact(Version::new(5, 0, 2)))
        .build();

        assert!(matches!(
            rule.package(&Version::new(5, 0, 2)),
            Err(TemplateError::UnknownPlaceholder { .. })
        ));
    }

    #[test]
    fn pre_release_flag_follows_rule_and_version() {
        let dev_rule = Rule::builder(
            OsFamily::Linux,
            Architecture::X64,
            "/linux/mongodb-linux-x86_64-debian11-{version}.tgz",
        )
        .range(VersionRange::exact(Version::new(7, 0, 0).with_pre_release("rc8")))
        .dev()
        .build();

        let package = dev_rule
            .package(&Version::new(7, 0, 0).with_pre_release("rc8"))
            .unwrap();
        assert!(package.pre_release);
    }
}
