//! Configuration for the goxunit command line
//!
//! This module provides the command-line flags and their translation into
//! parser options, stream locations and logging levels.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use goxunit_parse::{IgnoredTests, ParseOptions, Unterminated};
use goxunit_xml::OutputFormat;

/// Report format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatOpt {
    /// xUnit XML
    #[default]
    Xml,
    /// Pretty-printed JSON of the report model
    Json,
}

impl From<FormatOpt> for OutputFormat {
    fn from(opt: FormatOpt) -> Self {
        match opt {
            FormatOpt::Xml => OutputFormat::Xml,
            FormatOpt::Json => OutputFormat::Json,
        }
    }
}

/// Unterminated test policy options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnterminatedOpt {
    /// Record the test as failed with time N/A
    Fail,
    /// Discard the test
    Drop,
}

impl From<UnterminatedOpt> for Unterminated {
    fn from(opt: UnterminatedOpt) -> Self {
        match opt {
            UnterminatedOpt::Fail => Unterminated::Fail,
            UnterminatedOpt::Drop => Unterminated::Drop,
        }
    }
}

/// Convert go test / gocheck console output to xUnit XML
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "goxunit")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Input file with test output
    ///
    /// Reads standard input when omitted or `-`.
    #[arg(short, long, env = "GOXUNIT_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the report
    ///
    /// Writes standard output when omitted or `-`.
    #[arg(short, long, env = "GOXUNIT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Exit with a non-zero status if any test failed
    #[arg(long, default_value = "false")]
    pub fail: bool,

    /// Always wrap suites in <testsuites> (for Atlassian Bamboo)
    #[arg(long, default_value = "false")]
    pub bamboo: bool,

    /// Parse gocheck output instead of go test output
    #[arg(long, default_value = "false")]
    pub gocheck: bool,

    /// Mark tests that triggered the race detector as failed
    #[arg(long, default_value = "false")]
    pub race: bool,

    /// Extra gocheck method names to ignore, besides SetUpTest and TearDownTest
    #[arg(long = "ignore-test", value_name = "NAME")]
    pub ignore_tests: Vec<String>,

    /// What to do with a test that never printed its end line
    ///
    /// Defaults to `fail` for go test output and `drop` for gocheck output.
    #[arg(long, value_enum)]
    pub unterminated: Option<UnterminatedOpt>,

    /// Report format
    #[arg(long, value_enum, ignore_case = true, default_value_t)]
    pub format: FormatOpt,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every parsed test and suite. Logs are written to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// `None` and `-` both mean the standard stream
fn file_path(path: Option<&PathBuf>) -> Option<&Path> {
    path.map(PathBuf::as_path)
        .filter(|p| !p.as_os_str().is_empty() && p.as_os_str() != "-")
}

impl Config {
    /// Which protocol to parse
    #[must_use]
    pub fn parser(&self) -> goxunit_parse::Parser {
        if self.gocheck {
            goxunit_parse::Parser::GoCheck
        } else {
            goxunit_parse::Parser::GoTest
        }
    }

    /// Parser options from the command-line flags
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        let mut ignored = IgnoredTests::default();
        ignored.extend(self.ignore_tests.iter().cloned());

        let mut options = ParseOptions::default()
            .with_race_as_failure(self.race)
            .with_ignored_tests(ignored);
        options.unterminated = self.unterminated.map(Unterminated::from);
        options
    }

    /// Report format for the renderer
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format.into()
    }

    /// Input file, or `None` for standard input
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        file_path(self.input.as_ref())
    }

    /// Output file, or `None` for standard output
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        file_path(self.output.as_ref())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
