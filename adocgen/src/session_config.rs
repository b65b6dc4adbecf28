//! Session configuration from adocgen.toml
//!
//! Everything is optional; defaults reproduce the standard document header
//! (article doctype, utf-8, English, highlight.js, left-hand TOC three
//! levels deep) and the `output.adoc` filename.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default output filename when neither CLI nor config names one.
pub const DEFAULT_OUTPUT: &str = "output.adoc";

/// Session configuration loaded from adocgen.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Default output filename
    pub output: String,

    /// Document attribute directive values for the header
    pub attributes: AttributeSet,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            attributes: AttributeSet::default(),
        }
    }
}

/// Values for the document attribute directives emitted in the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    /// `:doctype:` value
    pub doctype: String,

    /// `:encoding:` value
    pub encoding: String,

    /// `:lang:` value
    pub lang: String,

    /// `:source-highlighter:` value
    pub source_highlighter: String,

    /// `:toc:` placement, emitted only when the TOC is requested
    pub toc: String,

    /// `:toclevels:` depth, emitted only when the TOC is requested
    pub toclevels: u8,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            doctype: "article".to_string(),
            encoding: "utf-8".to_string(),
            lang: "en".to_string(),
            source_highlighter: "highlightjs".to_string(),
            toc: "left".to_string(),
            toclevels: 3,
        }
    }
}

impl SessionConfig {
    /// Load configuration from an adocgen.toml file.
    ///
    /// # Parameters
    /// * `path` - Path to the adocgen.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SessionConfig)` - Successfully loaded configuration
    /// * `Err(SessionConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SessionConfigError> {
        let content = fs::read_to_string(&path)?;
        let config: SessionConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Errors that can occur when loading session configuration.
#[derive(Error, Debug)]
pub enum SessionConfigError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
