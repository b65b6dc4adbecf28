//! Interactive authoring session
//!
//! Orchestrates one session end to end: greeting, metadata collection,
//! the read-eval loop over the interpreter, and handing back the finished
//! document. Saving is left to the caller.

use crate::document::Document;
use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::line_source::LineSource;
use crate::table_builder::TableBuildError;
use anyhow::Result;

/// Help listing shown on an unrecognized command.
const COMMAND_HELP: &str =
    "Available commands: -l, -c, -code, -t, = <level> <text>, end-c, end-code, exit";

/// Metadata supplied up front (e.g. from CLI flags); anything left `None`
/// is collected interactively.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Document title
    pub title: Option<String>,

    /// Author name
    pub author: Option<String>,

    /// Whether to emit table-of-contents directives
    pub include_toc: Option<bool>,
}

/// Run one authoring session and return the finished document.
///
/// End of the input stream anywhere is treated like `exit`: open entities
/// are finalized and the document is returned with what was collected so
/// far.
pub fn run(lines: &mut dyn LineSource, opts: &SessionOptions) -> Result<Document> {
    lines.notify("Welcome to adocgen - AsciiDoc file generator");
    lines.notify("--------------------------------------------");

    let (title, author, include_toc) = collect_metadata(lines, opts)?;
    log::debug!("session metadata: title={:?} author={:?} toc={}", title, author, include_toc);

    print_command_help(lines);

    let mut interpreter = Interpreter::new();
    loop {
        let Some(line) = lines.read_line("> ")? else {
            break;
        };

        match interpreter.process(&line, lines) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(CommandError::Table(TableBuildError::Io(e))) => return Err(e.into()),
            Err(CommandError::Table(TableBuildError::InputClosed)) => {
                lines.notify(&TableBuildError::InputClosed.to_string());
                break;
            }
            Err(e) => {
                // Rejected line, nothing committed; keep reading.
                let unrecognized = matches!(&e, CommandError::UnrecognizedCommand { .. });
                lines.notify(&e.to_string());
                if unrecognized {
                    lines.notify(COMMAND_HELP);
                }
            }
        }
    }

    Ok(Document {
        title,
        author,
        include_toc,
        body: interpreter.into_body(),
    })
}

/// Collect title, author and TOC choice, prompting only for the fields not
/// already supplied.
fn collect_metadata(
    lines: &mut dyn LineSource,
    opts: &SessionOptions,
) -> Result<(String, String, bool)> {
    let title = match &opts.title {
        Some(title) => title.clone(),
        None => prompt_trimmed(lines, "Enter document title: ")?,
    };

    let author = match &opts.author {
        Some(author) => author.clone(),
        None => prompt_trimmed(lines, "Enter author name: ")?,
    };

    let include_toc = match opts.include_toc {
        Some(include_toc) => include_toc,
        None => prompt_trimmed(lines, "Include table of contents? (y/n): ")?
            .to_lowercase()
            .starts_with('y'),
    };

    Ok((title, author, include_toc))
}

/// Prompt for one metadata field; end of stream yields an empty value.
fn prompt_trimmed(lines: &mut dyn LineSource, prompt: &str) -> Result<String> {
    Ok(lines
        .read_line(prompt)?
        .unwrap_or_default()
        .trim()
        .to_string())
}

fn print_command_help(lines: &mut dyn LineSource) {
    lines.notify("\nStart writing your content:");
    lines.notify("Use -l to create a bullet point line");
    lines.notify("Use -c to create a collapsible section (provide title after -c)");
    lines.notify("Use -t to create a table");
    lines.notify("Use -code [language] to start a code snippet");
    lines.notify(
        "Use = [level] [text] to create a heading (e.g. '= 2 Section Title' for level 2 heading)",
    );
    lines.notify("Type 'exit' to finish and save the document");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_source::ScriptedLineSource;

    #[test]
    fn test_metadata_is_prompted_and_trimmed() {
        let mut source =
            ScriptedLineSource::new(["  My Title  ", " An Author ", "Y", "exit"]);
        let doc = run(&mut source, &SessionOptions::default()).unwrap();
        assert_eq!(doc.title, "My Title");
        assert_eq!(doc.author, "An Author");
        assert!(doc.include_toc);
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_supplied_metadata_skips_prompts() {
        let mut source = ScriptedLineSource::new(["-l one", "exit"]);
        let opts = SessionOptions {
            title: Some("T".to_string()),
            author: Some("A".to_string()),
            include_toc: Some(false),
        };
        let doc = run(&mut source, &opts).unwrap();
        assert_eq!(doc.title, "T");
        assert!(!doc.include_toc);
        assert_eq!(doc.body, vec!["* one\n\n"]);
        // Only the content prompt was issued.
        assert!(source.prompts.iter().all(|p| p == "> "));
    }

    #[test]
    fn test_toc_answer_must_start_with_y() {
        for (answer, expected) in [("y", true), ("yes", true), ("n", false), ("maybe", false)] {
            let mut source = ScriptedLineSource::new(["T", "A", answer, "exit"]);
            let doc = run(&mut source, &SessionOptions::default()).unwrap();
            assert_eq!(doc.include_toc, expected, "answer {:?}", answer);
        }
    }

    #[test]
    fn test_unrecognized_command_prints_help_and_continues() {
        let mut source = ScriptedLineSource::new(["T", "A", "n", "bogus", "-l ok", "exit"]);
        let doc = run(&mut source, &SessionOptions::default()).unwrap();
        assert_eq!(doc.body, vec!["* ok\n\n"]);
        assert!(source.notices.iter().any(|n| n.contains("Invalid command")));
        assert!(source.notices.iter().any(|n| n == COMMAND_HELP));
    }

    #[test]
    fn test_end_of_stream_finalizes_open_entities() {
        // No exit command: the stream just ends mid-section.
        let mut source = ScriptedLineSource::new(["T", "A", "n", "-c Open", "-l inside"]);
        let doc = run(&mut source, &SessionOptions::default()).unwrap();
        assert_eq!(doc.body.len(), 1);
        assert!(doc.body[0].starts_with(".Open\n[%collapsible]\n"));
        assert!(doc.body[0].contains("* inside\n\n"));
    }

    #[test]
    fn test_invalid_column_count_aborts_only_the_table() {
        let mut source = ScriptedLineSource::new([
            "T", "A", "n", "-t", "nope", "-l after", "exit",
        ]);
        let doc = run(&mut source, &SessionOptions::default()).unwrap();
        assert_eq!(doc.body, vec!["* after\n\n"]);
        assert!(source
            .notices
            .iter()
            .any(|n| n.contains("Invalid column count")));
    }
}
