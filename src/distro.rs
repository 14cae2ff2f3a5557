//! Linux distro families and their release enumerations
//!
//! Each family carries its own ordered list of releases. Ordering is
//! expressed through an explicit declaration rank per release rather than
//! any implicit enum ordering, and [`DistroVersion`] ties the families
//! together as one tagged union so rules and platforms can hold releases
//! from any family.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Distro family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distro {
    Ubuntu,
    Debian,
    Centos,
    Redhat,
    Oracle,
    Fedora,
    Amazon,
    LinuxMint,
    PopOs,
}

macro_rules! distro_releases {
    (
        $(#[$meta:meta])*
        $name:ident, $family:ident {
            $($variant:ident => ($rank:expr, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every release of this family, oldest first
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Declaration rank within the family (monotonic with release
            /// recency)
            #[inline]
            pub const fn rank(self) -> u8 {
                match self {
                    $(Self::$variant => $rank),+
                }
            }

            /// Release name as used on the command line and in output
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for DistroVersion {
            fn from(version: $name) -> Self {
                Self::$family(version)
            }
        }
    };
}

distro_releases! {
    /// Ubuntu releases
    UbuntuVersion, Ubuntu {
        Ubuntu1604 => (0, "ubuntu-16.04"),
        Ubuntu1610 => (1, "ubuntu-16.10"),
        Ubuntu1704 => (2, "ubuntu-17.04"),
        Ubuntu1710 => (3, "ubuntu-17.10"),
        Ubuntu1804 => (4, "ubuntu-18.04"),
        Ubuntu1810 => (5, "ubuntu-18.10"),
        Ubuntu1904 => (6, "ubuntu-19.04"),
        Ubuntu1910 => (7, "ubuntu-19.10"),
        Ubuntu2004 => (8, "ubuntu-20.04"),
        Ubuntu2010 => (9, "ubuntu-20.10"),
        Ubuntu2104 => (10, "ubuntu-21.04"),
        Ubuntu2110 => (11, "ubuntu-21.10"),
        Ubuntu2204 => (12, "ubuntu-22.04"),
        Ubuntu2210 => (13, "ubuntu-22.10"),
        Ubuntu2304 => (14, "ubuntu-23.04"),
        Ubuntu2310 => (15, "ubuntu-23.10"),
    }
}

distro_releases! {
    /// Debian releases
    DebianVersion, Debian {
        Debian9 => (0, "debian-9"),
        Debian10 => (1, "debian-10"),
        Debian11 => (2, "debian-11"),
        Debian12 => (3, "debian-12"),
    }
}

distro_releases! {
    /// CentOS releases (9 is CentOS Stream)
    CentosVersion, Centos {
        Centos6 => (0, "centos-6"),
        Centos7 => (1, "centos-7"),
        Centos8 => (2, "centos-8"),
        Centos9 => (3, "centos-9"),
    }
}

distro_releases! {
    /// Red Hat Enterprise Linux releases
    RedhatVersion, Redhat {
        Redhat6 => (0, "rhel-6"),
        Redhat7 => (1, "rhel-7"),
        Redhat8 => (2, "rhel-8"),
        Redhat9 => (3, "rhel-9"),
    }
}

distro_releases! {
    /// Oracle Linux releases
    OracleVersion, Oracle {
        Oracle6 => (0, "oracle-6"),
        Oracle7 => (1, "oracle-7"),
        Oracle8 => (2, "oracle-8"),
        Oracle9 => (3, "oracle-9"),
    }
}

distro_releases! {
    /// Fedora releases
    FedoraVersion, Fedora {
        Fedora38 => (0, "fedora-38"),
    }
}

distro_releases! {
    /// Amazon Linux releases
    AmazonVersion, Amazon {
        AmazonLinux => (0, "amazon"),
        AmazonLinux2 => (1, "amazon-2"),
        AmazonLinux2023 => (2, "amazon-2023"),
    }
}

distro_releases! {
    /// Linux Mint releases
    LinuxMintVersion, LinuxMint {
        Mint190 => (0, "mint-19.0"),
        Mint191 => (1, "mint-19.1"),
        Mint192 => (2, "mint-19.2"),
        Mint193 => (3, "mint-19.3"),
        Mint200 => (4, "mint-20.0"),
        Mint201 => (5, "mint-20.1"),
        Mint202 => (6, "mint-20.2"),
        Mint203 => (7, "mint-20.3"),
        Mint210 => (8, "mint-21.0"),
        Mint211 => (9, "mint-21.1"),
        Mint212 => (10, "mint-21.2"),
    }
}

distro_releases! {
    /// Pop!_OS releases
    PopOsVersion, PopOs {
        PopOs2204 => (0, "popos-22.04"),
    }
}

/// A concrete distro release, tagged with its family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistroVersion {
    Ubuntu(UbuntuVersion),
    Debian(DebianVersion),
    Centos(CentosVersion),
    Redhat(RedhatVersion),
    Oracle(OracleVersion),
    Fedora(FedoraVersion),
    Amazon(AmazonVersion),
    LinuxMint(LinuxMintVersion),
    PopOs(PopOsVersion),
}

impl DistroVersion {
    /// The family this release belongs to
    #[inline]
    pub const fn distro(self) -> Distro {
        match self {
            Self::Ubuntu(_) => Distro::Ubuntu,
            Self::Debian(_) => Distro::Debian,
            Self::Centos(_) => Distro::Centos,
            Self::Redhat(_) => Distro::Redhat,
            Self::Oracle(_) => Distro::Oracle,
            Self::Fedora(_) => Distro::Fedora,
            Self::Amazon(_) => Distro::Amazon,
            Self::LinuxMint(_) => Distro::LinuxMint,
            Self::PopOs(_) => Distro::PopOs,
        }
    }

    /// Declaration rank within the family
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Ubuntu(v) => v.rank(),
            Self::Debian(v) => v.rank(),
            Self::Centos(v) => v.rank(),
            Self::Redhat(v) => v.rank(),
            Self::Oracle(v) => v.rank(),
            Self::Fedora(v) => v.rank(),
            Self::Amazon(v) => v.rank(),
            Self::LinuxMint(v) => v.rank(),
            Self::PopOs(v) => v.rank(),
        }
    }

    /// Release name as used on the command line and in output
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ubuntu(v) => v.as_str(),
            Self::Debian(v) => v.as_str(),
            Self::Centos(v) => v.as_str(),
            Self::Redhat(v) => v.as_str(),
            Self::Oracle(v) => v.as_str(),
            Self::Fedora(v) => v.as_str(),
            Self::Amazon(v) => v.as_str(),
            Self::LinuxMint(v) => v.as_str(),
            Self::PopOs(v) => v.as_str(),
        }
    }

    /// Every known release across all families
    pub fn all() -> impl Iterator<Item = Self> {
        let ubuntu = UbuntuVersion::ALL.iter().copied().map(Self::Ubuntu);
        let debian = DebianVersion::ALL.iter().copied().map(Self::Debian);
        let centos = CentosVersion::ALL.iter().copied().map(Self::Centos);
        let redhat = RedhatVersion::ALL.iter().copied().map(Self::Redhat);
        let oracle = OracleVersion::ALL.iter().copied().map(Self::Oracle);
        let fedora = FedoraVersion::ALL.iter().copied().map(Self::Fedora);
        let amazon = AmazonVersion::ALL.iter().copied().map(Self::Amazon);
        let mint = LinuxMintVersion::ALL.iter().copied().map(Self::LinuxMint);
        let popos = PopOsVersion::ALL.iter().copied().map(Self::PopOs);

        ubuntu
            .chain(debian)
            .chain(centos)
            .chain(redhat)
            .chain(oracle)
            .chain(fedora)
            .chain(amazon)
            .chain(mint)
            .chain(popos)
    }

    /// Every release of one family, oldest first
    pub fn family_releases(distro: Distro) -> Vec<Self> {
        Self::all().filter(|v| v.distro() == distro).collect()
    }

    /// This release and every newer release of the same family, oldest
    /// first.
    ///
    /// This is how the rule tables enumerate forward compatibility: a rule
    /// declared for one release lists that release plus everything newer in
    /// its family.
    pub fn and_newer(self) -> Vec<Self> {
        Self::family_releases(self.distro())
            .into_iter()
            .filter(|v| v.rank() >= self.rank())
            .collect()
    }
}

impl fmt::Display for DistroVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a distro release name is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown distro version '{0}' (run `mongodl platforms` for the supported list)")]
pub struct UnknownDistroVersion(pub String);

impl FromStr for DistroVersion {
    type Err = UnknownDistroVersion;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.to_lowercase().trim().to_string();

        Self::all()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| UnknownDistroVersion(name.to_string()))
    }
}
