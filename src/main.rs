//! Mongodl command-line interface
//!
//! Resolves MongoDB download archives for a platform and version

use clap::{Parser, Subcommand};
use std::process;

/// Display an error with its source chain
fn display_error(err: &anyhow::Error) {
    eprintln!("error: {err}");

    let mut source = err.source();
    while let Some(err) = source {
        eprintln!("caused by: {err}");
        source = err.source();
    }
}

#[derive(Parser)]
#[command(name = "mongodl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve MongoDB download archives", long_about = None)]
#[command(disable_version_flag = true)]
pub(crate) struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the download archive for a command, platform and version
    Resolve {
        /// Command the archive must provide (mongod, mongos, mongo,
        /// mongodump, mongorestore, mongoimport)
        command: String,

        /// Version to resolve (e.g. 6.0.8 or 7.0.0-rc8)
        version: String,

        /// Target OS family (linux, macos, windows)
        #[arg(long, default_value = "linux")]
        os: String,

        /// Target CPU architecture (x86_64, arm64, i686)
        #[arg(long, default_value = "x86_64")]
        arch: String,

        /// Target distro release label (e.g. ubuntu-22.04, debian-11)
        #[arg(long)]
        distro: Option<String>,

        /// Download mirror base URL
        #[arg(long, env = "MONGODL_MIRROR")]
        mirror: Option<String>,

        /// Print only the download URL
        #[arg(long, conflicts_with = "json")]
        url_only: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known distro releases and their compatibility aliases
    Platforms {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the rule tables consulted for a command
    Rules {
        /// Command whose tables to dump
        command: String,

        /// Restrict to one OS family (linux, macos, windows)
        #[arg(long)]
        os: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    mongodl::init_debug(cli.debug || mongodl::env_vars::debug());

    let result = match cli.command {
        Commands::Resolve {
            command,
            version,
            os,
            arch,
            distro,
            mirror,
            url_only,
            json,
        } => commands::resolve::run(
            &command,
            &version,
            &os,
            &arch,
            distro.as_deref(),
            mirror.as_deref(),
            url_only,
            json,
        ),
        Commands::Platforms { json } => commands::platforms::run(json),
        Commands::Rules { command, os, json } => {
            commands::rules::run(&command, os.as_deref(), json)
        }
        Commands::Completion { shell } => commands::completion::run(shell),
    };

    if let Err(err) = result {
        display_error(&err);
        process::exit(1);
    }
}

mod commands;
