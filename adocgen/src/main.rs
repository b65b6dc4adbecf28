//! adocgen - Interactive AsciiDoc file generator
//!
//! A CLI tool that turns a line-based command session into a structured
//! AsciiDoc document and writes it out once at the end.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cli;
mod document;
mod fragments;
mod interpreter;
mod line_source;
mod session;
mod session_config;
mod table_builder;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use line_source::ConsoleLineSource;
use session::SessionOptions;
use session_config::SessionConfig;
use std::path::PathBuf;

/// Main entry point for the adocgen CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let config = load_config(cli.config.as_deref())?;
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output));

    let opts = SessionOptions {
        title: cli.title,
        author: cli.author,
        include_toc: cli.toc,
    };

    let mut lines = ConsoleLineSource::new();
    let doc = session::run(&mut lines, &opts)?;

    doc.save(&output, &config.attributes)
        .with_context(|| format!("Error saving document to {}", output.display()))?;

    println!("\nDocument saved as '{}'", output.display());

    Ok(())
}

/// Load session configuration.
///
/// An explicitly named config file must load; an `adocgen.toml` in the
/// working directory is picked up when present; otherwise defaults apply.
fn load_config(path: Option<&std::path::Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let default_path = std::path::Path::new("adocgen.toml");
            if default_path.exists() {
                log::debug!("loading config from {}", default_path.display());
                SessionConfig::load(default_path)
                    .with_context(|| "Failed to load config from adocgen.toml".to_string())
            } else {
                Ok(SessionConfig::default())
            }
        }
    }
}
