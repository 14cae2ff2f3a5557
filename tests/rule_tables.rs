//! Structural checks over the shipped rule tables

use mongodl::{
    Architecture, Command, DistroVersion, FedoraVersion, OsFamily, PackageResolver, Platform,
    Resolution, RuleSet, UbuntuVersion, Version,
};

#[test]
fn rule_sets_serialize_as_data_tables() {
    let resolver = PackageResolver::new(Command::Mongod);
    let rule_set = resolver.rule_set(OsFamily::Linux);

    let json = serde_json::to_string(rule_set).expect("rule sets serialize");
    let restored: RuleSet = serde_json::from_str(&json).expect("rule sets deserialize");

    assert_eq!(rule_set, &restored);
    assert!(!restored.is_empty());
}

#[test]
fn every_template_names_exactly_one_version_axis() {
    for command in Command::ALL {
        let resolver = PackageResolver::new(*command);
        for os in [OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows] {
            for rule in resolver.rule_set(os).rules() {
                let product = rule.template().contains("{version}");
                let tools = rule.template().contains("{tools.version}");
                assert!(
                    product ^ tools,
                    "template '{}' must use one placeholder",
                    rule.template()
                );
            }
        }
    }
}

#[test]
fn declaration_order_breaks_ties_between_overlapping_rules() {
    // 4.0.5 on Ubuntu 16.04 is covered both by the ubuntu1604 archive and
    // by the generic legacy linux archive; the distro-specific group is
    // declared first and must win.
    let platform = Platform::new(OsFamily::Linux, Architecture::X64)
        .with_distro_version(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu1604));

    let resolution =
        mongodl::resolve(Command::Mongod, &platform, &Version::new(4, 0, 5)).unwrap();
    let package = resolution.package().expect("4.0.5 archive exists");

    assert_eq!(package.path, "/linux/mongodb-linux-x86_64-ubuntu1604-4.0.5.tgz");
}

#[test]
fn expansion_order_breaks_ties_across_compatibility_edges() {
    // Fedora has no archives of its own; the first expansion step with any
    // matching rule (RHEL 9) decides the result.
    let platform = Platform::new(OsFamily::Linux, Architecture::X64)
        .with_distro_version(DistroVersion::Fedora(FedoraVersion::Fedora38));

    let resolution =
        mongodl::resolve(Command::Mongod, &platform, &Version::new(6, 0, 8)).unwrap();
    let package = resolution.package().expect("fedora resolves via rhel90");

    assert_eq!(package.path, "/linux/mongodb-linux-x86_64-rhel90-6.0.8.tgz");
}

#[test]
fn dev_rules_only_serve_pre_release_requests() {
    for command in [Command::Mongod, Command::Mongos, Command::Mongo] {
        let resolver = PackageResolver::new(command);
        let platform = Platform::new(OsFamily::Linux, Architecture::X64)
            .with_distro_version(DistroVersion::Ubuntu(UbuntuVersion::Ubuntu2204));

        let resolution = resolver
            .resolve(&platform, &Version::new(7, 0, 0).with_pre_release("rc8"))
            .unwrap();
        match resolution {
            Resolution::Package(package) => assert!(package.pre_release),
            Resolution::Unsupported(unsupported) => {
                panic!("rc8 archive should exist: {unsupported}")
            }
        }
    }
}

#[test]
fn server_rule_sets_never_contain_tools_archives() {
    for command in Command::ALL.iter().filter(|c| !c.is_tool()) {
        let resolver = PackageResolver::new(*command);
        for os in [OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows] {
            for rule in resolver.rule_set(os).rules() {
                assert!(
                    !rule.template().contains("database-tools"),
                    "{command} must not see '{}'",
                    rule.template()
                );
            }
        }
    }
}
