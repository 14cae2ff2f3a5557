//! Distro compatibility expansion
//!
//! A platform declaring one distro release may legitimately use archives
//! built for another: derivative distros track an upstream base (Mint and
//! Pop!_OS follow an Ubuntu release, Ubuntu follows a Debian base) and the
//! Red Hat clones share RHEL builds at matching majors. [`expand`] turns a
//! platform into the ordered sequence of variants the resolver scans, most
//! specific first.
//!
//! The alias table below is declared data, carried over from upstream
//! artifact availability. It is intentionally one-directional and uneven
//! (Ubuntu aliases to Debian, never the reverse; early Ubuntu releases have
//! no Debian base at all). Forward compatibility within a single family is
//! not handled here: the rule tables enumerate it release by release.

use crate::distro::{
    AmazonVersion, CentosVersion, DebianVersion, DistroVersion, FedoraVersion, LinuxMintVersion,
    OracleVersion, PopOsVersion, RedhatVersion, UbuntuVersion,
};
use crate::platform::Platform;

/// Compute the ordered platform variants whose rules `platform` may use.
///
/// The platform itself always comes first. A platform without a distro
/// release expands to just its generic variant, letting a resolver fall
/// back to distro-agnostic rules.
#[must_use]
pub fn expand(platform: &Platform) -> Vec<Platform> {
    let Some(version) = platform.distro_version else {
        return vec![platform.without_distro()];
    };

    let mut variants = vec![platform.clone()];
    let mut current = version;
    while let Some(base) = alias_of(current) {
        variants.push(platform.without_distro().with_distro_version(base));
        current = base;
    }
    variants
}

/// Cross-family base release for a distro release, if one is declared.
///
/// Chains are followed transitively by [`expand`] (Mint -> Ubuntu ->
/// Debian).
fn alias_of(version: DistroVersion) -> Option<DistroVersion> {
    use DistroVersion as D;

    match version {
        D::Ubuntu(v) => ubuntu_debian_base(v).map(D::Debian),
        D::LinuxMint(v) => Some(D::Ubuntu(mint_ubuntu_base(v))),
        D::PopOs(PopOsVersion::PopOs2204) => Some(D::Ubuntu(UbuntuVersion::Ubuntu2204)),
        D::Centos(v) => Some(D::Redhat(match v {
            CentosVersion::Centos6 => RedhatVersion::Redhat6,
            CentosVersion::Centos7 => RedhatVersion::Redhat7,
            CentosVersion::Centos8 => RedhatVersion::Redhat8,
            CentosVersion::Centos9 => RedhatVersion::Redhat9,
        })),
        D::Oracle(v) => Some(D::Redhat(match v {
            OracleVersion::Oracle6 => RedhatVersion::Redhat6,
            OracleVersion::Oracle7 => RedhatVersion::Redhat7,
            OracleVersion::Oracle8 => RedhatVersion::Redhat8,
            OracleVersion::Oracle9 => RedhatVersion::Redhat9,
        })),
        D::Fedora(FedoraVersion::Fedora38) => Some(D::Redhat(RedhatVersion::Redhat9)),
        D::Debian(_) | D::Redhat(_) | D::Amazon(_) => None,
    }
}

/// Debian base of an Ubuntu release. Releases before 18.04 never had a
/// usable Debian-built archive, so they stay unaliased.
fn ubuntu_debian_base(version: UbuntuVersion) -> Option<DebianVersion> {
    use UbuntuVersion as U;

    match version {
        U::Ubuntu1604 | U::Ubuntu1610 | U::Ubuntu1704 | U::Ubuntu1710 => None,
        U::Ubuntu1804 | U::Ubuntu1810 => Some(DebianVersion::Debian9),
        U::Ubuntu1904 | U::Ubuntu1910 | U::Ubuntu2004 | U::Ubuntu2010 => {
            Some(DebianVersion::Debian10)
        }
        U::Ubuntu2104 | U::Ubuntu2110 | U::Ubuntu2204 | U::Ubuntu2210 => {
            Some(DebianVersion::Debian11)
        }
        U::Ubuntu2304 | U::Ubuntu2310 => Some(DebianVersion::Debian12),
    }
}

/// Ubuntu release each Linux Mint line is built on
fn mint_ubuntu_base(version: LinuxMintVersion) -> UbuntuVersion {
    use LinuxMintVersion as M;

    match version {
        M::Mint190 | M::Mint191 | M::Mint192 | M::Mint193 => UbuntuVersion::Ubuntu1804,
        M::Mint200 | M::Mint201 | M::Mint202 | M::Mint203 => UbuntuVersion::Ubuntu2004,
        M::Mint210 | M::Mint211 | M::Mint212 => UbuntuVersion::Ubuntu2204,
    }
}
