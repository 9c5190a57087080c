//! # bddtable
//!
//! A CLI tool that turns tab-separated test-case files into BDD example tables.
//!
//! ## Overview
//!
//! bddtable is built on top of bddtablelib. It reads the TSV output of a
//! combinatorial test generator and prints it as a pipe-delimited table ready
//! to paste under a Cucumber `Examples:` block. Cells starting with `~` are
//! negative test values: the marker is stripped and an `IS_ERROR` column
//! records which rows carried one.
//!
//! ## Usage
//!
//! ```bash
//! # Print the table to stdout
//! bddtable cases.tsv
//!
//! # Write the table to a file
//! bddtable cases.tsv cases.table
//!
//! # Use a different negative marker
//! bddtable cases.tsv --marker '!'
//!
//! # Strip markers without adding the IS_ERROR column
//! bddtable cases.tsv --no-error-column
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` (or pass `-v`) for more detail.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use bddtablelib::{convert_file, ConvertOptions, ConvertSummary, NEGATIVE_MARKER};
use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("bddtable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert a tab-separated test-case file into a BDD example table")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Tab-separated input file (first non-blank line is the header)"),
        )
        .arg(
            Arg::new("output")
                .help("Output file (created or truncated); defaults to stdout"),
        )
        .arg(
            Arg::new("marker")
                .short('m')
                .long("marker")
                .default_value(NEGATIVE_MARKER)
                .value_parser(NonEmptyStringValueParser::new())
                .help("Prefix marking a cell as a negative test value"),
        )
        .arg(
            Arg::new("no-error-column")
                .long("no-error-column")
                .action(ArgAction::SetTrue)
                .help("Strip negative markers without adding the IS_ERROR column"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log conversion details to stderr"),
        )
}

/// Build conversion options from matches
fn build_options(matches: &ArgMatches) -> ConvertOptions {
    let mut options =
        ConvertOptions::new().error_column_enabled(!matches.get_flag("no-error-column"));
    if let Some(marker) = matches.get_one::<String>("marker") {
        options = options.marker(marker.as_str());
    }
    options
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<ConvertSummary> {
    let input = matches
        .get_one::<String>("input")
        .context("missing input file")?;
    let output = matches.get_one::<String>("output").map(Path::new);
    let options = build_options(matches);

    convert_file(input, output, &options).with_context(|| format!("converting '{input}'"))
}

fn main() -> ExitCode {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // --help and --version land here too and are not failures.
            // A failed print means the stream is closed; the exit status
            // still carries the outcome.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "conversion failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["bddtable"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_default_options() {
        let options = build_options(&parse(&["cases.tsv"]));
        assert_eq!(options, ConvertOptions::new());
    }

    #[test]
    fn test_marker_and_no_error_column() {
        let options = build_options(&parse(&[
            "cases.tsv",
            "--marker",
            "!",
            "--no-error-column",
        ]));
        assert_eq!(options.marker, "!");
        assert!(!options.append_error_column);
    }

    #[test]
    fn test_missing_input_is_error() {
        let err = build_command().try_get_matches_from(["bddtable"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let result = build_command().try_get_matches_from(["bddtable", "in.tsv", "--marker", ""]);
        assert!(result.is_err());
    }
}
