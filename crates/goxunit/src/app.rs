// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Conversion pipeline
//!
//! Opens the input, runs the selected parser, renders the report and decides
//! the process exit status.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use goxunit::app;
//! use goxunit::config::Config;
//!
//! let config = Config::parse_from(["goxunit", "--input", "go-test.out", "--fail"]);
//! let outcome = app::run(&config).expect("conversion failed");
//! std::process::exit(if outcome == app::RunOutcome::Success { 0 } else { 1 });
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use goxunit_parse::Report;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

/// Application-level failures that are not parse or I/O errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The input parsed cleanly but contained no suites
    #[error("no tests found")]
    NoTests,
}

/// Result of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Report written; nothing to signal
    Success,
    /// Report written; tests failed and `--fail` was given
    Failures,
}

impl RunOutcome {
    /// Process exit status for this outcome
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Success => ExitCode::SUCCESS,
            RunOutcome::Failures => ExitCode::FAILURE,
        }
    }
}

/// Open the configured input, or standard input
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub fn open_input(config: &Config) -> anyhow::Result<Box<dyn BufRead>> {
    match config.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can't open {} for reading", path.display()))?;
            debug!(path = %path.display(), "Reading test output from file");
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("Reading test output from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Open the configured output, or standard output
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(config: &Config) -> anyhow::Result<Box<dyn Write>> {
    match config.output_path() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("can't open {} for writing", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Parse the input into a report
///
/// # Errors
///
/// Returns the parse error, or `AppError::NoTests` if no suite was found.
pub fn parse_report(reader: impl BufRead, config: &Config) -> anyhow::Result<Report> {
    let parser = config.parser();
    let suites = parser.parse(reader, &config.parse_options())?;
    if suites.is_empty() {
        return Err(AppError::NoTests.into());
    }
    Ok(Report::new(suites, config.bamboo))
}

/// Decide the outcome for a rendered report
#[must_use]
pub fn outcome(config: &Config, report: &Report) -> RunOutcome {
    if config.fail && report.has_failures() {
        RunOutcome::Failures
    } else {
        RunOutcome::Success
    }
}

/// Parse from `reader` and render to `writer`
///
/// # Errors
///
/// Returns an error if parsing fails, nothing was found, or writing fails.
pub fn convert(
    reader: impl BufRead,
    mut writer: impl Write,
    config: &Config,
) -> anyhow::Result<RunOutcome> {
    let report = parse_report(reader, config)?;
    config
        .output_format()
        .render(&report, &mut writer)
        .context("error writing output")?;
    writer.flush().context("error writing output")?;
    Ok(outcome(config, &report))
}

/// Run a full conversion as configured
///
/// The output is only opened once parsing succeeded, so a failed run never
/// truncates an existing report.
///
/// # Errors
///
/// Returns an error for unreadable input, parse failures, an empty result,
/// or unwritable output.
pub fn run(config: &Config) -> anyhow::Result<RunOutcome> {
    let input = open_input(config)?;
    let report = parse_report(input, config)?;

    let mut output = open_output(config)?;
    config
        .output_format()
        .render(&report, &mut output)
        .context("error writing output")?;
    output.flush().context("error writing output")?;

    let totals = report.totals();
    info!(
        suites = report.suites.len(),
        tests = totals.tests,
        failures = totals.failures,
        errors = totals.errors,
        skipped = totals.skipped,
        format = ?config.format,
        "Report written"
    );

    Ok(outcome(config, &report))
}
