//! Resolve command
//!
//! Resolve the download archive for a command, platform and version

use anyhow::{Context, Result};
use mongodl::{
    Command, DistroVersion, OsFamily, Platform, Resolution, Version, VersionKind, debug,
};
use serde_json::json;

/// Resolve a download archive and print it
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub(crate) fn run(
    command: &str,
    version: &str,
    os: &str,
    arch: &str,
    distro: Option<&str>,
    mirror: Option<&str>,
    url_only: bool,
    json: bool,
) -> Result<()> {
    let command: Command = command.parse()?;
    let os: OsFamily = os.parse()?;

    let mut platform = Platform::new(os, arch.parse()?);
    if let Some(label) = distro {
        let distro_version: DistroVersion = label.parse()?;
        platform = platform.with_distro_version(distro_version);
    }

    let version = parse_version(command, version)
        .with_context(|| format!("invalid version '{version}'"))?;

    let mirror = mirror.map_or_else(mongodl::mirror_url, ToString::to_string);

    debug!("resolving {command} {version} for {platform}");

    let resolution = mongodl::resolve(command, &platform, &version)?;
    let package = match resolution {
        Resolution::Package(package) => package,
        Resolution::Unsupported(unsupported) => anyhow::bail!("{unsupported}"),
    };

    let url = package.download_url(&mirror);

    if url_only {
        println!("{url}");
        return Ok(());
    }

    if json {
        let output = json!({
            "command": command,
            "platform": platform,
            "version": version.to_string(),
            "url": url,
            "archive": package.archive,
            "pre_release": package.pre_release,
            "files": package.file_set.entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{command} {version} on {platform}");
    println!("  url:     {url}");
    println!("  archive: {}", package.archive.extension());
    if package.pre_release {
        println!("  channel: pre-release");
    }
    for entry in &package.file_set.entries {
        println!("  file:    {}", entry.name);
    }

    Ok(())
}

/// Parse a version string on the axis the command implies.
///
/// The database-tools line started at 99.0.0, so a tool command with a
/// smaller major is a request against an old server archive that still
/// bundled the tools.
fn parse_version(command: Command, input: &str) -> Result<Version, mongodl::VersionError> {
    let product = Version::parse(input, VersionKind::Product)?;
    if command.is_tool() && product.major >= 99 {
        return Version::parse(input, VersionKind::Tools);
    }
    Ok(product)
}
