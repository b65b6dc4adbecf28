//! Document model and header assembly
//!
//! Holds the metadata collected at session start plus the body fragments
//! accumulated by the interpreter, assembles the full AsciiDoc string, and
//! writes it out once at session end.

use crate::session_config::AttributeSet;
use std::fs;
use std::io;
use std::path::Path;

/// A finished document: metadata plus the ordered body fragments.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document title, accepted as-is (no escaping)
    pub title: String,

    /// Author line, accepted as-is
    pub author: String,

    /// Whether to emit the table-of-contents directives
    pub include_toc: bool,

    /// Rendered body fragments in insertion order
    pub body: Vec<String>,
}

impl Document {
    /// Assemble the complete document string.
    ///
    /// Emits the title line, author line, the fixed attribute directives,
    /// the two TOC directives iff `include_toc`, a blank separator, then
    /// the body verbatim.
    pub fn assemble(&self, attrs: &AttributeSet) -> String {
        let mut out = String::new();

        out.push_str(&format!("= {}\n", self.title));
        out.push_str(&format!("{}\n", self.author));
        out.push_str(&format!(":doctype: {}\n", attrs.doctype));
        out.push_str(&format!(":encoding: {}\n", attrs.encoding));
        out.push_str(&format!(":lang: {}\n", attrs.lang));
        out.push_str(&format!(
            ":source-highlighter: {}\n",
            attrs.source_highlighter
        ));

        if self.include_toc {
            out.push_str(&format!(":toc: {}\n", attrs.toc));
            out.push_str(&format!(":toclevels: {}\n", attrs.toclevels));
        }

        out.push_str("\n\n");

        for fragment in &self.body {
            out.push_str(fragment);
        }

        out
    }

    /// Assemble and write the document to `path` in one shot.
    ///
    /// The whole document is held in memory and flushed once; there is no
    /// retry or fallback path on failure.
    pub fn save(&self, path: &Path, attrs: &AttributeSet) -> io::Result<()> {
        fs::write(path, self.assemble(attrs))
    }
}
