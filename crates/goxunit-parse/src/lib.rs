// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! goxunit-parse: Go test console output parsing for goxunit
//!
//! This library crate turns the console output of `go test -v` and
//! `go test -gocheck.vv` into a structured report of suites and tests.
//!
//! # Example
//!
//! ```no_run
//! use goxunit_parse::{ParseOptions, parse_gotest};
//!
//! let output = "=== RUN TestAdd\n--- PASS: TestAdd (0.01)\nok  pkg/math  0.01\n";
//! let suites = parse_gotest(output.as_bytes(), &ParseOptions::default()).unwrap();
//! assert_eq!(suites[0].name, "pkg/math");
//! ```
//!
//! Both parsers are also available as line-at-a-time state machines
//! ([`GoTestParser`], [`GoCheckParser`]) for callers that already hold lines.

pub mod classify;
pub mod error;
pub mod gocheck;
pub mod gotest;
pub mod lines;
pub mod options;
pub mod report;

use std::io::BufRead;

pub use error::ParseError;
pub use gocheck::{GoCheckParser, parse_gocheck};
pub use gotest::{GoTestParser, parse_gotest};
pub use options::{IgnoredTests, ParseOptions, Unterminated};
pub use report::{Report, Suite, Test, Totals};

/// Time recorded for a test that never printed its own end marker
pub const UNTERMINATED_TIME: &str = "N/A";

/// The two console output conventions understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parser {
    /// Flat `go test -v` output with `=== RUN` / `--- PASS` markers
    #[default]
    GoTest,
    /// Nested `gocheck` output with `START:` / `PASS:` markers
    GoCheck,
}

impl Parser {
    /// Parse a whole stream with the selected protocol
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on I/O failure or malformed protocol sequencing.
    pub fn parse(self, reader: impl BufRead, options: &ParseOptions) -> Result<Vec<Suite>, ParseError> {
        match self {
            Parser::GoTest => parse_gotest(reader, options),
            Parser::GoCheck => parse_gocheck(reader, options),
        }
    }
}
