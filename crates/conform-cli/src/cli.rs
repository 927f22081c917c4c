//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "conform")]
#[command(version)]
#[command(about = "Check JavaScript/TypeScript file-organization conventions", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). CONFORM_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a source tree
    Check(CheckArgs),
    /// List the available rules
    Rules,
    /// Print the JSON schema of conform.toml
    Schema,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file (default: nearest conform.toml above PATH)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from a preset ("recommended" or "strict") instead of the config file's rules
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Output format: text, json or sarif
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Only run these rules (repeatable)
    #[arg(long = "rule", value_name = "NAME")]
    pub rules: Vec<String>,
}
