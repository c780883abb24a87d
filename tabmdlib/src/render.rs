//! Table renderers for delimited and Markdown output.

use crate::error::TabmdError;
use crate::store::ColumnStore;
use crate::Result;

/// Render a column store as delimited text.
///
/// One line per row, cells joined with `separator`, no escaping and no
/// padding. An empty store fails with [`TabmdError::EmptyInput`].
pub fn render_delimited(store: &ColumnStore, separator: &str) -> Result<String> {
    if store.column_count() == 0 {
        return Err(TabmdError::EmptyInput);
    }

    let mut output = String::new();
    for idx in 0..store.row_count() {
        let cells: Vec<&str> = store.row(idx).collect();
        output.push_str(&cells.join(separator));
        output.push('\n');
    }
    Ok(output)
}

/// Render a column store as a Markdown table.
///
/// Row 0 is treated as the header; the dash separator row is synthesized
/// from the computed column widths directly below it and never repeated.
/// When `formatted` is false the table is emitted compact, without padding.
/// An empty store fails with [`TabmdError::EmptyInput`].
pub fn render_markdown(store: &ColumnStore, formatted: bool) -> Result<String> {
    if store.column_count() == 0 {
        return Err(TabmdError::EmptyInput);
    }

    let widths = store.widths();
    let mut output = String::new();
    for idx in 0..store.row_count() {
        output.push('|');
        for (cell, width) in store.row(idx).zip(&widths) {
            output.push_str(&format_cell(cell, *width, formatted));
            output.push('|');
        }
        output.push('\n');
        if idx == 0 {
            output.push_str(&separator_row(&widths, formatted));
        }
    }
    Ok(output)
}

/// Render a single Markdown cell.
///
/// Formatted cells get one space on each side plus right-padding out to the
/// column width, so every cell in a column occupies `width + 2` characters.
/// Mini cells are the raw text.
fn format_cell(text: &str, width: usize, formatted: bool) -> String {
    if formatted {
        let padding = width - text.chars().count();
        format!(" {} {}", text, " ".repeat(padding))
    } else {
        text.to_string()
    }
}

/// Synthesize the dash separator row below the header.
///
/// Formatted runs span the full padded cell width; mini runs are the
/// three-dash minimum Markdown requires.
fn separator_row(widths: &[usize], formatted: bool) -> String {
    let mut row = String::from("|");
    for width in widths {
        let dashes = if formatted { width + 2 } else { 3 };
        row.push_str(&"-".repeat(dashes));
        row.push('|');
    }
    row.push('\n');
    row
}
