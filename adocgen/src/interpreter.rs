//! Mode-stack command interpreter
//!
//! Dispatches each input line to a mode-specific handler and accumulates
//! rendered fragments into the active buffer: either the top-level document
//! body or the currently open collapsible section. A code snippet is an
//! orthogonal sub-mode layered on top of whichever placement is active;
//! while it is open every line is captured verbatim.
//!
//! Side effects are confined to state mutation and buffer appends; no file
//! I/O happens here.

use crate::fragments;
use crate::line_source::LineSource;
use crate::table_builder::{self, TableBuildError};
use thiserror::Error;

/// Errors raised by command dispatch.
///
/// All of them are recovered locally by the session loop: the offending
/// line is rejected, a diagnostic is surfaced, and no state changes.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Heading command had fewer than three parts.
    #[error("Invalid heading format. Use '= <level> <text>'")]
    InvalidHeadingFormat,

    /// Heading level token was not an integer.
    #[error("Invalid heading level. Use '= <level> <text>'")]
    InvalidHeadingLevel,

    /// Heading level parsed but fell outside 1-6.
    #[error("Heading level must be between 1 and 6, got {level}")]
    HeadingLevelOutOfRange {
        /// The rejected level
        level: i64,
    },

    /// Line matched no command.
    #[error("Invalid command: '{input}'")]
    UnrecognizedCommand {
        /// The rejected line
        input: String,
    },

    /// The table sub-dialog failed.
    #[error(transparent)]
    Table(#[from] TableBuildError),
}

/// Result of processing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading lines.
    Continue,
    /// The session is over; the body is final.
    Exit,
}

/// Where new top-level content currently lands.
#[derive(Debug)]
enum Placement {
    /// Fragments go straight to the document body.
    TopLevel,
    /// Fragments go to the open collapsible section.
    Section {
        title: String,
        buffer: Vec<String>,
    },
}

/// An open code snippet capturing raw lines.
#[derive(Debug)]
struct CodeCapture {
    language: String,
    buffer: String,
}

/// The command interpreter. One per session.
#[derive(Debug)]
pub struct Interpreter {
    body: Vec<String>,
    placement: Placement,
    code: Option<CodeCapture>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter in top-level placement with an empty body.
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            placement: Placement::TopLevel,
            code: None,
        }
    }

    /// Process one input line.
    ///
    /// `lines` is borrowed for sub-dialogs (the table builder) and for
    /// mode-transition notices. Parse errors leave all state untouched.
    pub fn process(
        &mut self,
        input: &str,
        lines: &mut dyn LineSource,
    ) -> Result<Outcome, CommandError> {
        if input.eq_ignore_ascii_case("exit") {
            self.finalize_all();
            return Ok(Outcome::Exit);
        }

        // Raw capture mode: nothing but the closing sentinel is parsed.
        if self.code.is_some() {
            if input == "end-code" {
                self.finalize_code();
                lines.notify("Code snippet ended");
            } else if let Some(code) = self.code.as_mut() {
                code.buffer.push_str(input);
                code.buffer.push('\n');
            }
            return Ok(Outcome::Continue);
        }

        if let Some(text) = input.strip_prefix("-l ") {
            self.append(fragments::bullet(text));
        } else if input.starts_with("= ") {
            let fragment = parse_heading(input)?;
            self.append(fragment);
        } else if let Some(title) = input.strip_prefix("-c ") {
            // Opening a section implicitly closes the previous one;
            // nesting is not supported.
            self.finalize_section();
            self.placement = Placement::Section {
                title: title.to_string(),
                buffer: Vec::new(),
            };
            lines.notify(&format!("Writing collapsible section: {}", title));
            lines.notify(
                "(Add content with -l, start a new section with -c, or type 'end-c' to end this section)",
            );
        } else if input == "end-c" && matches!(self.placement, Placement::Section { .. }) {
            self.finalize_section();
            lines.notify("Collapsible section ended");
        } else if let Some(language) = input.strip_prefix("-code ") {
            self.code = Some(CodeCapture {
                language: language.trim().to_string(),
                buffer: String::new(),
            });
            lines.notify(&format!(
                "Writing code snippet in {}",
                language.trim()
            ));
            lines.notify("Enter code lines. Type 'end-code' when finished.");
        } else if input == "-t" {
            let fragment = table_builder::build(lines)?;
            self.append(fragment);
        } else {
            log::debug!("rejected line: {:?}", input);
            return Err(CommandError::UnrecognizedCommand {
                input: input.to_string(),
            });
        }

        Ok(Outcome::Continue)
    }

    /// Finalize any open code snippet and section, then return the body.
    ///
    /// Idempotent with respect to a preceding `exit`, which already ran
    /// the finalization.
    pub fn into_body(mut self) -> Vec<String> {
        self.finalize_all();
        self.body
    }

    /// Append a rendered fragment to the active buffer.
    fn append(&mut self, fragment: String) {
        match &mut self.placement {
            Placement::TopLevel => self.body.push(fragment),
            Placement::Section { buffer, .. } => buffer.push(fragment),
        }
    }

    /// Close the open code snippet, then the open section. The snippet is
    /// routed first so its fragment lands inside the section it was opened
    /// in.
    fn finalize_all(&mut self) {
        self.finalize_code();
        self.finalize_section();
    }

    /// Render the open code snippet into the active buffer.
    fn finalize_code(&mut self) {
        if let Some(code) = self.code.take() {
            self.append(fragments::code_block(&code.language, &code.buffer));
        }
    }

    /// Render the open section into the document body and return to
    /// top-level placement.
    fn finalize_section(&mut self) {
        let placement = std::mem::replace(&mut self.placement, Placement::TopLevel);
        if let Placement::Section { title, buffer } = placement {
            self.body
                .push(fragments::collapsible_section(&title, &buffer.concat()));
        }
    }
}

/// Parse `= <level> <text...>` into a rendered heading fragment.
fn parse_heading(input: &str) -> Result<String, CommandError> {
    let mut parts = input.splitn(3, ' ');
    let _marker = parts.next();
    let (Some(level_token), Some(text)) = (parts.next(), parts.next()) else {
        return Err(CommandError::InvalidHeadingFormat);
    };

    let level: i64 = level_token
        .parse()
        .map_err(|_| CommandError::InvalidHeadingLevel)?;
    if !(1..=6).contains(&level) {
        return Err(CommandError::HeadingLevelOutOfRange { level });
    }

    Ok(fragments::heading(level as usize, text))
}
