//! Column-oriented table store.
//!
//! The transposition step between parsing and rendering. Markdown rendering
//! needs per-column widths, which require every row of a column at once, so
//! the whole table is materialized here.

use crate::error::TabmdError;
use crate::escape::escape_markdown;
use crate::parse::Matrix;
use crate::Result;

/// A table transposed into column order.
///
/// `columns[j][i]` holds the cell at row `i`, column `j` of the source
/// matrix. All columns have the same length; the column count is the width
/// of the first source row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnStore {
    columns: Vec<Vec<String>>,
}

impl ColumnStore {
    /// Transpose a row-major matrix into a column store.
    ///
    /// The column count is taken from the first row. A later row narrower
    /// than the first fails with [`TabmdError::RowWidth`]; extra trailing
    /// cells on a wider row are dropped. An empty matrix transposes to an
    /// empty store (the renderers guard against that).
    ///
    /// When `escape` is set, every cell is run through
    /// [`escape_markdown`] on the way in.
    pub fn from_matrix(matrix: &Matrix, escape: bool) -> Result<Self> {
        let Some(first) = matrix.first() else {
            return Ok(Self::default());
        };

        let width = first.len();
        let mut columns: Vec<Vec<String>> = vec![Vec::with_capacity(matrix.len()); width];
        for (row_idx, row) in matrix.iter().enumerate() {
            if row.len() < width {
                return Err(TabmdError::RowWidth {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                let value = if escape {
                    escape_markdown(cell)
                } else {
                    cell.clone()
                };
                column.push(value);
            }
        }

        Ok(Self { columns })
    }

    /// Number of columns (the width of the first source row).
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows; every column holds exactly this many cells.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Per-column display widths: the longest cell in each column, in
    /// characters.
    pub fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Iterate the cells of row `index` across all columns.
    ///
    /// # Panics
    /// Panics if `index >= row_count()`.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(move |column| column[index].as_str())
    }

    /// The columns, in table order.
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }
}
