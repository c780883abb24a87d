//! Row parsers for delimited and Markdown input.
//!
//! Both parsers turn raw input text into a row-major [`Matrix`] of string
//! cells. Whether a line is a "header" is a convention applied only by the
//! Markdown renderer; parsing treats all data lines alike.

use crate::error::TabmdError;
use crate::Result;

/// A single table row: one string per cell.
pub type Row = Vec<String>;

/// A row-major table: one [`Row`] per input line.
pub type Matrix = Vec<Row>;

/// Characters trimmed from both ends of a Markdown cell.
const MD_CELL_TRIM: &[char] = &[' ', '\r', '\n'];

/// Parse delimited text into a row-major matrix.
///
/// Every input line becomes one row, split on `separator`. There is no
/// quoting: a separator inside a field always splits it. Line terminators
/// (`\n`, `\r\n`) are stripped, and a trailing terminator does not produce
/// a spurious empty row.
pub fn parse_delimited(input: &str, separator: &str) -> Matrix {
    input
        .lines()
        .map(|line| line.split(separator).map(str::to_string).collect())
        .collect()
}

/// Parse a Markdown table into a row-major matrix.
///
/// The physical line at index 1 is the `|---|---|` header-separator row and
/// is skipped without being parsed. Every other line is split on `|`, the
/// leading and trailing fields produced by the outer pipes are dropped, and
/// the remaining cells are trimmed of surrounding spaces.
///
/// An input with exactly one line has no separator row to skip and fails
/// with [`TabmdError::MissingSeparatorRow`]. A line without outer pipes
/// yields an empty row; the transposer's width check rejects it later.
pub fn parse_markdown(input: &str) -> Result<Matrix> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() == 1 {
        return Err(TabmdError::MissingSeparatorRow);
    }

    Ok(lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 1)
        .map(|(_, line)| split_markdown_row(line))
        .collect())
}

/// Split one Markdown table line into its cells.
fn split_markdown_row(line: &str) -> Row {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return Row::new();
    }
    fields[1..fields.len() - 1]
        .iter()
        .map(|cell| cell.trim_matches(MD_CELL_TRIM).to_string())
        .collect()
}
