//! # tabmdlib
//!
//! Convert tabular data between delimiter-separated text (CSV-like, with a
//! configurable separator) and Markdown tables.
//!
//! ## Overview
//!
//! The conversion is a three-stage pipeline:
//!
//! 1. **Row parsing** ([`parse`]): input text becomes a row-major matrix of
//!    string cells, in either the delimited or the Markdown format.
//! 2. **Transposition** ([`store`]): the matrix is turned into a
//!    column-oriented [`ColumnStore`], optionally Markdown-escaping each
//!    cell ([`escape`]) on the way in.
//! 3. **Rendering** ([`render`]): the store is written back out as a
//!    delimited table or as a padded/compact Markdown table with a
//!    synthesized header separator row.
//!
//! The library works on strings only; reading stdin and writing stdout is
//! the `tabmd` binary's job.
//!
//! ## Example
//!
//! ```rust
//! use tabmdlib::{convert, ConvertOptions, Format};
//!
//! // Delimited to formatted Markdown (the defaults)
//! let table = convert("a;bb;ccc\nx;y;z\n", &ConvertOptions::new()).unwrap();
//! assert_eq!(table, "| a | bb | ccc |\n|---|----|-----|\n| x | y  | z   |\n");
//!
//! // Markdown back to delimited, with a comma separator
//! let options = ConvertOptions::new()
//!     .input(Format::Md)
//!     .output(Format::Csv)
//!     .separator(",");
//! let csv = convert(&table, &options).unwrap();
//! assert_eq!(csv, "a,bb,ccc\nx,y,z\n");
//! ```

pub mod convert;
pub mod error;
pub mod escape;
pub mod options;
pub mod parse;
pub mod render;
pub mod store;

pub use convert::convert;
pub use error::TabmdError;
pub use escape::{escape_markdown, MARKDOWN_ESCAPES};
pub use options::{resolve_separator, ConvertOptions, Format};
pub use parse::{parse_delimited, parse_markdown, Matrix, Row};
pub use render::{render_delimited, render_markdown};
pub use store::ColumnStore;

/// Result type for tabmdlib operations
pub type Result<T> = std::result::Result<T, TabmdError>;
