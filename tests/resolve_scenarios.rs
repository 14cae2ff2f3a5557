//! End-to-end resolution scenarios against the shipped rule tables

use mongodl::{
    Architecture, CentosVersion, Command, DebianVersion, DistroVersion, LinuxMintVersion,
    OsFamily, Platform, Resolution, UbuntuVersion, Version, VersionKind,
};

fn linux_x64(distro: Option<DistroVersion>) -> Platform {
    let platform = Platform::new(OsFamily::Linux, Architecture::X64);
    match distro {
        Some(distro) => platform.with_distro_version(distro),
        None => platform,
    }
}

fn resolve_path(command: Command, platform: &Platform, version: &Version) -> String {
    match mongodl::resolve(command, platform, version).unwrap() {
        Resolution::Package(package) => package.path,
        Resolution::Unsupported(unsupported) => {
            panic!("expected a package, got: {unsupported}")
        }
    }
}

#[test]
fn debian9_gets_the_debian92_archive() {
    let platform = linux_x64(Some(DistroVersion::Debian(DebianVersion::Debian9)));
    let path = resolve_path(Command::Mongo, &platform, &Version::new(5, 0, 2));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-debian92-5.0.2.tgz");
}

#[test]
fn debian12_resolves_through_the_ubuntu2004_archive() {
    // Debian 12 has no 5.0.2 archive of its own and reuses the 20.04
    // build; newer versions with a real debian11 archive stay on it.
    let platform = linux_x64(Some(DistroVersion::Debian(DebianVersion::Debian12)));
    let path = resolve_path(Command::Mongod, &platform, &Version::new(5, 0, 2));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz");

    let path = resolve_path(Command::Mongod, &platform, &Version::new(6, 0, 8));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-debian11-6.0.8.tgz");
}

#[test]
fn ubuntu2010_resolves_through_the_ubuntu2004_archive() {
    let platform = linux_x64(Some(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu2010)));
    let path = resolve_path(Command::Mongo, &platform, &Version::new(5, 0, 2));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz");
}

#[test]
fn bare_linux_falls_back_to_the_ubuntu2004_archive() {
    let platform = linux_x64(None);
    let path = resolve_path(Command::Mongo, &platform, &Version::new(5, 0, 2));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz");
}

#[test]
fn pre_release_versions_only_match_pre_release_rules() {
    let platform = linux_x64(Some(DistroVersion::Debian(DebianVersion::Debian11)));
    let version = Version::new(7, 0, 0).with_pre_release("rc8");

    let package = match mongodl::resolve(Command::Mongo, &platform, &version).unwrap() {
        Resolution::Package(package) => package,
        Resolution::Unsupported(unsupported) => panic!("expected a package: {unsupported}"),
    };
    assert_eq!(
        package.path,
        "/linux/mongodb-linux-x86_64-debian11-7.0.0-rc8.tgz"
    );
    assert!(package.pre_release);

    // The stable rule for the same archive must not pick up an rc.
    let stable = resolve_path(Command::Mongo, &platform, &Version::new(6, 0, 8));
    assert_eq!(stable, "/linux/mongodb-linux-x86_64-debian11-6.0.8.tgz");
}

#[test]
fn tool_commands_resolve_through_the_database_tools_tables() {
    let platform = linux_x64(Some(DistroVersion::Debian(DebianVersion::Debian10)));
    let version = Version::tools(100, 7, 2);

    let path = resolve_path(Command::MongoDump, &platform, &version);
    assert_eq!(
        path,
        "/tools/db/mongodb-database-tools-debian10-x86_64-100.7.2.tgz"
    );
}

#[test]
fn unknown_versions_report_unsupported() {
    let platform = linux_x64(Some(DistroVersion::Debian(DebianVersion::Debian9)));
    let resolution =
        mongodl::resolve(Command::Mongo, &platform, &Version::new(9, 9, 9)).unwrap();

    match resolution {
        Resolution::Unsupported(unsupported) => {
            assert_eq!(unsupported.command, Command::Mongo);
            assert_eq!(unsupported.version, Version::new(9, 9, 9));
        }
        Resolution::Package(package) => panic!("expected unsupported, got {package}"),
    }
}

#[test]
fn mint_walks_its_alias_chain_to_ubuntu() {
    let platform = linux_x64(Some(DistroVersion::LinuxMint(LinuxMintVersion::Mint203)));
    let path = resolve_path(Command::Mongod, &platform, &Version::new(5, 0, 2));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz");
}

#[test]
fn centos_resolves_through_the_rhel_archives() {
    let platform = linux_x64(Some(DistroVersion::Centos(CentosVersion::Centos8)));
    let path = resolve_path(Command::Mongod, &platform, &Version::new(6, 0, 8));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-rhel80-6.0.8.tgz");
}

#[test]
fn exact_distro_rules_beat_compatibility_edges() {
    // Ubuntu 18.04 has its own archive for 4.4.9; the Debian 9 alias must
    // never shadow it.
    let platform = linux_x64(Some(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1804)));
    let path = resolve_path(Command::Mongod, &platform, &Version::new(4, 4, 9));
    assert_eq!(path, "/linux/mongodb-linux-x86_64-ubuntu1804-4.4.9.tgz");
}

#[test]
fn macos_and_windows_resolve_without_distros() {
    let macos = Platform::new(OsFamily::MacOs, Architecture::Arm64);
    let path = resolve_path(Command::Mongod, &macos, &Version::new(6, 0, 4));
    assert_eq!(path, "/osx/mongodb-macos-arm64-6.0.4.tgz");

    let windows = Platform::new(OsFamily::Windows, Architecture::X64);
    let path = resolve_path(Command::Mongod, &windows, &Version::new(5, 0, 2));
    assert_eq!(path, "/windows/mongodb-windows-x86_64-5.0.2.zip");
}

#[test]
fn resolution_is_deterministic() {
    let platform = linux_x64(Some(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu2204)));
    let version = Version::new(6, 0, 8);

    let first = mongodl::resolve(Command::Mongod, &platform, &version).unwrap();
    for _ in 0..10 {
        let again = mongodl::resolve(Command::Mongod, &platform, &version).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn download_urls_join_mirror_and_path() {
    let platform = linux_x64(None);
    let resolution =
        mongodl::resolve(Command::Mongod, &platform, &Version::new(5, 0, 2)).unwrap();
    let package = resolution.package().expect("package");

    assert_eq!(
        package.download_url("https://fastdl.mongodb.org"),
        "https://fastdl.mongodb.org/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz"
    );
    // Trailing slashes on the mirror never double up.
    assert_eq!(
        package.download_url("https://mirror.example.com/"),
        "https://mirror.example.com/linux/mongodb-linux-x86_64-ubuntu2004-5.0.2.tgz"
    );
}

#[test]
fn version_ordering_puts_pre_releases_below_the_release() {
    let release = Version::new(7, 0, 0);
    let rc2 = Version::new(7, 0, 0).with_pre_release("rc2");
    let rc10 = Version::new(7, 0, 0).with_pre_release("rc10");

    assert!(rc2 < release);
    assert!(rc2 < rc10);

    // The tools axis sorts apart from the product axis entirely.
    assert_eq!(Version::tools(100, 7, 2).kind, VersionKind::Tools);
    assert_ne!(Version::tools(100, 7, 2), Version::new(100, 7, 2));
}
