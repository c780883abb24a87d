//! Error types for tabmdlib

use thiserror::Error;

/// Errors that can occur during table conversion
#[derive(Error, Debug)]
pub enum TabmdError {
    /// Unknown table format selector
    #[error("invalid format '{0}' (csv or md expected)")]
    UnknownFormat(String),

    /// A row is narrower than the first row of the table
    #[error("malformed table: row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Markdown input has a header but no separator row below it
    #[error("malformed markdown table: no separator row after the header line")]
    MissingSeparatorRow,

    /// Input contained no table rows
    #[error("empty input: at least one table row is required")]
    EmptyInput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
