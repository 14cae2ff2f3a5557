//! Rules command
//!
//! Dump the rule tables consulted for a command

use anyhow::Result;
use mongodl::{Command, OsFamily, PackageResolver};
use serde_json::json;

/// Print the rule tables for a command, in the order they are consulted
pub(crate) fn run(command: &str, os: Option<&str>, json: bool) -> Result<()> {
    let command: Command = command.parse()?;

    let families = match os {
        Some(name) => vec![name.parse::<OsFamily>()?],
        None => vec![OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows],
    };

    let resolver = PackageResolver::new(command);

    if json {
        let output: Vec<_> = families
            .iter()
            .map(|family| {
                json!({
                    "os": family,
                    "rules": resolver.rule_set(*family).rules(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for family in families {
        let rule_set = resolver.rule_set(family);
        println!("{command} on {family} ({} rules)", rule_set.len());

        for rule in rule_set.rules() {
            let marker = if rule.is_dev() { " [dev]" } else { "" };
            println!("  {}{marker}", rule.template());
        }
        println!();
    }

    Ok(())
}
