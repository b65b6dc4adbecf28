//! AsciiDoc fragment formatters
//!
//! Pure rendering functions that turn one semantic content unit (heading,
//! bullet, table, code block, collapsible section) into its AsciiDoc
//! markup string. No state, no I/O; exact delimiter spacing matters for
//! markup fidelity.

use itertools::Itertools;

/// Render a heading fragment.
///
/// The caller is responsible for level bounds (1-6); this function only
/// formats.
///
/// # Parameters
/// * `level` - Heading level (1 = document title level, 6 = deepest)
/// * `text` - Heading text, taken as-is
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}\n\n", "=".repeat(level), text)
}

/// Render a bullet point fragment.
///
/// One blank-line convention is applied uniformly, whether the fragment
/// ends up at the top level or inside a collapsible section.
pub fn bullet(text: &str) -> String {
    format!("* {}\n\n", text)
}

/// Render a code block fragment.
///
/// # Parameters
/// * `language` - Language tag for the `[source,...]` attribute (may be empty)
/// * `content` - Accumulated code lines, each already newline-terminated
pub fn code_block(language: &str, content: &str) -> String {
    format!("[source,{}]\n----\n{}----\n\n", language, content)
}

/// Render a collapsible section fragment.
///
/// # Parameters
/// * `title` - Section title for the `.{title}` marker line
/// * `content` - Accumulated section body, included verbatim
pub fn collapsible_section(title: &str, content: &str) -> String {
    format!(".{}\n[%collapsible]\n====\n{}====\n\n", title, content)
}

/// Render a table fragment.
///
/// Header and data rows are each a single line of cells joined with `" |"`
/// after a leading `"|"`, separated by blank lines and bounded by `|===`
/// fences.
pub fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::from("|===\n");

    out.push('|');
    out.push_str(&headers.iter().join(" |"));
    out.push_str("\n\n");

    for row in rows {
        out.push('|');
        out.push_str(&row.iter().join(" |"));
        out.push_str("\n\n");
    }

    out.push_str("|===\n\n");
    out
}
