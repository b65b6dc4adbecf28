//! Command-line interface definitions for adocgen

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the adocgen application
#[derive(Parser)]
#[command(name = "adocgen")]
#[command(version)]
#[command(about = "Interactive AsciiDoc file generator", long_about = None)]
pub struct Cli {
    /// Output file path (defaults to the config value, or output.adoc)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an adocgen.toml configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Document title (skips the interactive prompt)
    #[arg(long)]
    pub title: Option<String>,

    /// Author name (skips the interactive prompt)
    #[arg(long)]
    pub author: Option<String>,

    /// Include table-of-contents directives (skips the interactive prompt)
    #[arg(long, value_name = "BOOL")]
    pub toc: Option<bool>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
