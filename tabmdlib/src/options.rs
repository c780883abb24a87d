//! Conversion options.
//!
//! This module contains the configuration types that select the input and
//! output formats and control Markdown rendering.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TabmdError;

/// The separator token that maps to a horizontal tab.
const TAB_TOKEN: &str = "tab";

/// A table format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Delimiter-separated values (configurable separator, no quoting)
    Csv,
    /// Markdown table (pipe-delimited, two-line header convention)
    Md,
}

impl FromStr for Format {
    type Err = TabmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "md" => Ok(Format::Md),
            other => Err(TabmdError::UnknownFormat(other.to_string())),
        }
    }
}

/// Resolve a separator argument to the separator string actually used.
///
/// The literal token `tab` maps to a horizontal tab; anything else is used
/// as-is.
pub fn resolve_separator(separator: &str) -> String {
    if separator == TAB_TOKEN {
        "\t".to_string()
    } else {
        separator.to_string()
    }
}

/// Options for a single table conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Input table format
    pub input: Format,
    /// Output table format
    pub output: Format,
    /// Field separator for the delimited format
    pub separator: String,
    /// Pad Markdown cells so pipe columns line up
    pub formatted: bool,
    /// Escape Markdown-sensitive characters while transposing
    pub escape: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: Format::Csv,
            output: Format::Md,
            separator: ";".to_string(),
            formatted: true,
            escape: false,
        }
    }
}

impl ConvertOptions {
    /// Create new default options (csv in, formatted md out, `;` separator).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the input format.
    pub fn input(mut self, format: Format) -> Self {
        self.input = format;
        self
    }

    /// Builder: set the output format.
    pub fn output(mut self, format: Format) -> Self {
        self.output = format;
        self
    }

    /// Builder: set the delimited-format separator.
    ///
    /// The literal token `tab` selects a horizontal tab, as in
    /// [`resolve_separator`].
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = resolve_separator(&separator.into());
        self
    }

    /// Builder: set whether Markdown output is padded.
    pub fn formatted(mut self, formatted: bool) -> Self {
        self.formatted = formatted;
        self
    }

    /// Builder: set whether cells are Markdown-escaped.
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}
