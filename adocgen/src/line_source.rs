//! Line input abstraction for the interactive session
//!
//! The interpreter and the table builder never touch stdin/stdout directly;
//! they talk to a `LineSource`, so a test can drive a whole session by
//! feeding a scripted line sequence.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of user input lines, plus the channel for user-visible notices.
///
/// `read_line` blocks until one line is available and returns it without
/// its terminator; `Ok(None)` means the underlying stream ended.
pub trait LineSource {
    /// Print `prompt` (no trailing newline) and block for one input line.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Emit one notice line to the user.
    fn notify(&mut self, text: &str);
}

/// Interactive line source over the process stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleLineSource;

impl ConsoleLineSource {
    /// Create a console line source.
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for ConsoleLineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn notify(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Scripted line source for driving sessions from tests.
///
/// Returns the queued lines in order, then `Ok(None)`. Prompts and notices
/// are recorded so tests can assert on the dialog as well as the output.
#[derive(Debug, Default)]
pub struct ScriptedLineSource {
    lines: VecDeque<String>,

    /// Prompts issued so far, in order.
    pub prompts: Vec<String>,

    /// Notices issued so far, in order.
    pub notices: Vec<String>,
}

impl ScriptedLineSource {
    /// Create a scripted source from a sequence of input lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn notify(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
