//! One-shot table conversion pipeline.
//!
//! Ties the three stages together: row parsing, transposition into a
//! column store, and rendering. Strictly sequential, no feedback between
//! stages; the whole table is materialized before any output is produced.

use crate::options::{ConvertOptions, Format};
use crate::parse::{parse_delimited, parse_markdown};
use crate::render::{render_delimited, render_markdown};
use crate::store::ColumnStore;
use crate::Result;

/// Convert a table from one textual format to another.
///
/// This is the library's main entry point. The input is parsed according
/// to `options.input`, transposed (escaping cells when `options.escape` is
/// set), and rendered according to `options.output`.
///
/// # Example
///
/// ```rust
/// use tabmdlib::{convert, ConvertOptions, Format};
///
/// let options = ConvertOptions::new().input(Format::Csv).output(Format::Md);
/// let table = convert("a;bb\nx;y\n", &options).unwrap();
/// assert_eq!(table, "| a | bb |\n|---|----|\n| x | y  |\n");
/// ```
pub fn convert(input: &str, options: &ConvertOptions) -> Result<String> {
    let matrix = match options.input {
        Format::Csv => parse_delimited(input, &options.separator),
        Format::Md => parse_markdown(input)?,
    };

    let store = ColumnStore::from_matrix(&matrix, options.escape)?;

    match options.output {
        Format::Csv => render_delimited(&store, &options.separator),
        Format::Md => render_markdown(&store, options.formatted),
    }
}
