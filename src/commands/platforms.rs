//! Platforms command
//!
//! List known distro releases and their compatibility aliases

use anyhow::Result;
use mongodl::{Architecture, DistroVersion, OsFamily, Platform};
use serde_json::json;

/// Print every distro release the resolver knows, with the alias chain it
/// falls back through
pub(crate) fn run(json: bool) -> Result<()> {
    let entries: Vec<(DistroVersion, Vec<DistroVersion>)> = DistroVersion::all()
        .map(|release| (release, aliases(release)))
        .collect();

    if json {
        let output: Vec<_> = entries
            .iter()
            .map(|(release, aliases)| {
                json!({
                    "distro": release.as_str(),
                    "aliases": aliases.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (release, aliases) in &entries {
        if aliases.is_empty() {
            println!("{}", release.as_str());
        } else {
            let chain: Vec<&str> = aliases.iter().map(|a| a.as_str()).collect();
            println!("{} (falls back to {})", release.as_str(), chain.join(", "));
        }
    }

    Ok(())
}

/// The cross-family releases a distro falls back to, in search order
fn aliases(release: DistroVersion) -> Vec<DistroVersion> {
    let platform =
        Platform::new(OsFamily::Linux, Architecture::X64).with_distro_version(release);

    mongodl::expand(&platform)
        .into_iter()
        .skip(1)
        .filter_map(|variant| variant.distro_version)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;
    use mongodl::{DebianVersion, LinuxMintVersion, UbuntuVersion};

    #[test]
    fn mint_lists_its_whole_chain() {
        let chain = aliases(DistroVersion::LinuxMint(LinuxMintVersion::Mint190));
        assert_eq!(
            chain,
            vec![
                DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1804),
                DistroVersion::Debian(DebianVersion::Debian9),
            ]
        );
    }

    #[test]
    fn debian_has_no_aliases() {
        assert!(aliases(DistroVersion::Debian(DebianVersion::Debian11)).is_empty());
    }
}
