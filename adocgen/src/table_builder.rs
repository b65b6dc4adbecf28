//! Interactive table construction sub-dialog
//!
//! Collects column headers and row cells through further line prompts and
//! produces a single rendered table fragment. The builder owns the line
//! source for its duration; every row has exactly as many cells as there
//! are columns by construction.

use crate::fragments;
use crate::line_source::LineSource;
use thiserror::Error;

/// Sentinel entered as the first cell of a row to end table collection.
const END_TABLE: &str = "end-table";

/// Errors that can occur while building a table.
#[derive(Error, Debug)]
pub enum TableBuildError {
    /// Column count answer was not a positive integer; aborts this
    /// invocation only.
    #[error("Invalid column count '{input}', expected a positive integer")]
    InvalidColumnCount {
        /// The rejected answer
        input: String,
    },

    /// The end-table sentinel was entered after at least one cell of the
    /// current row; recovered inside the dialog by re-prompting.
    #[error("Please complete the current row or start a new row before ending the table")]
    IncompleteRowOnTerminate,

    /// Input stream ended before the table was complete.
    #[error("Input ended before the table was complete")]
    InputClosed,

    /// IO error while prompting or reading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the table dialog and return the rendered table fragment.
///
/// Protocol: column count, one header per column, then rows cell-by-cell.
/// `end-table` is honored only at a row boundary; mid-row it re-prompts
/// the same cell. After each complete row, any answer not starting with
/// `y` ends collection.
pub fn build(lines: &mut dyn LineSource) -> Result<String, TableBuildError> {
    lines.notify("Table creation:");

    let answer = read_required(lines, "Enter number of columns: ")?;
    let columns: usize = match answer.trim().parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            return Err(TableBuildError::InvalidColumnCount { input: answer });
        }
    };

    lines.notify("Enter column headers:");
    let mut headers = Vec::with_capacity(columns);
    for i in 0..columns {
        headers.push(read_required(lines, &format!("Header {}: ", i + 1))?);
    }

    lines.notify("Enter table data (type 'end-table' when finished):");
    let mut rows: Vec<Vec<String>> = Vec::new();
    loop {
        lines.notify(&format!("Row {}:", rows.len() + 1));

        let mut row = Vec::with_capacity(columns);
        while row.len() < columns {
            let cell = read_required(lines, &format!("{}: ", headers[row.len()]))?;
            if cell == END_TABLE {
                if row.is_empty() {
                    // Row boundary: discard the empty row, table is done.
                    return Ok(fragments::table(&headers, &rows));
                }
                lines.notify(&TableBuildError::IncompleteRowOnTerminate.to_string());
                continue;
            }
            row.push(cell);
        }
        rows.push(row);

        let again = read_required(lines, "Add another row? (y/n): ")?;
        if !again.trim().to_lowercase().starts_with('y') {
            break;
        }
    }

    Ok(fragments::table(&headers, &rows))
}

/// Read one line, treating end-of-stream as a table-build failure.
fn read_required(lines: &mut dyn LineSource, prompt: &str) -> Result<String, TableBuildError> {
    lines
        .read_line(prompt)?
        .ok_or(TableBuildError::InputClosed)
}
