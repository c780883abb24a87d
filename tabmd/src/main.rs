//! # tabmd
//!
//! Convert tables between delimited text (CSV-like) and Markdown, reading
//! the whole table from stdin and writing the converted table to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Delimited (`;`) to a formatted Markdown table
//! tabmd < table.csv
//!
//! # Compact Markdown without padding
//! tabmd --mini < table.csv
//!
//! # Markdown back to comma-separated text
//! tabmd --input md --output csv --separator , < table.md
//!
//! # Tab-separated input, escaping Markdown-sensitive characters
//! tabmd --separator tab --escape < table.tsv
//! ```
//!
//! All configuration is resolved before stdin is read: an invalid format
//! selector aborts immediately with a non-zero exit and no partial output.

use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use tabmdlib::{convert, ConvertOptions, Format, TabmdError};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tabmd")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert tables between delimited text and Markdown, stdin to stdout")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("csv|md")
                .default_value("csv")
                .help("Input table format"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("csv|md")
                .default_value("md")
                .help("Output table format"),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .value_name("sep")
                .default_value(";")
                .help("Field separator for delimited tables ('tab' for a tab character)"),
        )
        .arg(
            Arg::new("mini")
                .short('m')
                .long("mini")
                .action(ArgAction::SetTrue)
                .help("Compact Markdown output, no padding"),
        )
        .arg(
            Arg::new("escape")
                .short('e')
                .long("escape")
                .action(ArgAction::SetTrue)
                .help("Escape Markdown-sensitive characters in cell values"),
        )
}

/// Build conversion options from parsed arguments.
///
/// Format selectors are validated here, before any input is read.
fn build_options(matches: &ArgMatches) -> Result<ConvertOptions, TabmdError> {
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("csv")
        .parse::<Format>()?;
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("md")
        .parse::<Format>()?;
    let separator = matches
        .get_one::<String>("separator")
        .map(String::as_str)
        .unwrap_or(";");

    Ok(ConvertOptions::new()
        .input(input)
        .output(output)
        .separator(separator)
        .formatted(!matches.get_flag("mini"))
        .escape(matches.get_flag("escape")))
}

/// Read the source table from stdin and run the conversion.
fn run(options: &ConvertOptions) -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("no input provided; pipe a table into tabmd or redirect from a file");
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    Ok(convert(&input, options)?)
}

/// Write the converted table to stdout and flush.
fn write_output(table: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(table.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write stdout")
}

/// Report a fatal error on stderr and return a failing exit code.
fn fail(message: &str) -> ExitCode {
    let prefix = Style::new().red().bold().apply_to("Error:");
    eprintln!("{prefix} {message}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let options = match build_options(&matches) {
        Ok(options) => options,
        Err(e) => return fail(&e.to_string()),
    };

    match run(&options).and_then(|table| write_output(&table)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&format!("{e:#}")),
    }
}
