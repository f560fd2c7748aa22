// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -v` output parsing
//!
//! The flat protocol: tests run one at a time inside the current package, and
//! a package summary line (`ok pkg 0.01s` / `FAIL pkg 0.01s`) seals the suite.
//!
//! ```text
//! === RUN TestAdd
//! --- PASS: TestAdd (0.00 seconds)
//! === RUN TestDiv
//!     mmath_test.go:33: division by zero
//! --- FAIL: TestDiv (0.00 seconds)
//! FAIL
//! exit status 1
//! FAIL    pkg/math        0.004s
//! ```
//!
//! Output lines are buffered and attached to the test they belong to: lines
//! before an end marker become that test's message, lines after it (panic
//! traces, for example) are appended to the last completed test when the next
//! boundary arrives.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::UNTERMINATED_TIME;
use crate::classify::{GoTestLine, GoTestStatus, classify_gotest, is_race_warning};
use crate::error::ParseError;
use crate::lines::PrintableLines;
use crate::options::{ParseOptions, Unterminated};
use crate::report::{Suite, Test};

/// Line-at-a-time state machine for `go test -v` output
#[derive(Debug)]
pub struct GoTestParser {
    race_as_failure: bool,
    unterminated: Unterminated,
    line: usize,
    suites: Vec<Suite>,
    current_suite: Option<Suite>,
    current_test: Option<Test>,
    pending: Vec<String>,
    found_race: bool,
}

impl GoTestParser {
    /// Create a parser; unterminated tests are failed unless overridden
    #[must_use]
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            race_as_failure: options.race_as_failure,
            unterminated: options.unterminated_or(Unterminated::Fail),
            line: 0,
            suites: Vec::new(),
            current_suite: None,
            current_test: None,
            pending: Vec::new(),
            found_race: false,
        }
    }

    /// Number of lines processed so far
    #[must_use]
    pub fn lines_processed(&self) -> usize {
        self.line
    }

    /// Process the next sanitized line
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for a build failure, an end marker without an
    /// open test, or an end marker naming a different test.
    pub fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;

        match classify_gotest(line) {
            GoTestLine::NoTestFiles | GoTestLine::Noise => {}
            GoTestLine::BuildFailed => {
                return Err(ParseError::BuildFailed {
                    line: self.line,
                    text: line.to_string(),
                });
            }
            GoTestLine::Start { name } => {
                if self.current_test.is_some() {
                    self.interrupt();
                }
                self.flush_pending();
                self.current_test = Some(Test::new(name));
                self.found_race = false;
            }
            GoTestLine::End { status, name, time } => {
                let Some(mut test) = self.current_test.take() else {
                    return Err(ParseError::OrphanEnd {
                        line: self.line,
                        text: line.to_string(),
                    });
                };
                if test.name != name {
                    return Err(ParseError::NameMismatch {
                        line: self.line,
                        found: name.to_string(),
                        expected: test.name,
                    });
                }
                test.failed = status == GoTestStatus::Fail || self.found_race;
                test.skipped = status == GoTestStatus::Skip;
                test.time = time.to_string();
                test.message = self.pending.join("\n");
                self.pending.clear();

                debug!(test = %test.name, ?status, failed = test.failed, "Test finished");
                self.suite_mut().tests.push(test);
            }
            GoTestLine::Summary {
                status,
                package,
                time,
            } => {
                if self.current_test.is_some() {
                    self.interrupt();
                }
                self.flush_pending();

                let mut suite = self.current_suite.take().unwrap_or_default();
                suite.name = package.to_string();
                suite.time = Some(time.to_string());
                debug!(
                    suite = %suite.name,
                    ?status,
                    tests = suite.count(),
                    failures = suite.failed_count(),
                    "Suite sealed"
                );
                self.suites.push(suite);
            }
            GoTestLine::Output => {
                // Race reports never look like markers, so only output lines can carry one.
                if self.race_as_failure && is_race_warning(line) {
                    self.found_race = true;
                }
                self.pending.push(line.to_string());
            }
        }

        Ok(())
    }

    /// Return the sealed suites
    ///
    /// A suite that never saw its summary line is not part of the result.
    #[must_use]
    pub fn finish(self) -> Vec<Suite> {
        let unsealed = self.current_suite.as_ref().map_or(0, Suite::count)
            + usize::from(self.current_test.is_some());
        if unsealed > 0 {
            warn!(
                tests = unsealed,
                "Input ended before the package summary line; dropping unsealed tests"
            );
        }
        self.suites
    }

    fn suite_mut(&mut self) -> &mut Suite {
        self.current_suite.get_or_insert_with(Suite::default)
    }

    // The open test never printed its end marker, typically because it panicked.
    fn interrupt(&mut self) {
        let Some(mut test) = self.current_test.take() else {
            return;
        };
        match self.unterminated {
            Unterminated::Fail => {
                debug!(test = %test.name, "Test ended without an end marker; marking failed");
                test.failed = true;
                test.skipped = false;
                test.time = UNTERMINATED_TIME.to_string();
                self.suite_mut().tests.push(test);
            }
            Unterminated::Drop => {
                debug!(test = %test.name, "Test ended without an end marker; dropping");
                self.pending.clear();
            }
        }
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = self.pending.join("\n");
            if let Some(suite) = self.current_suite.as_mut() {
                suite.append_to_last(&text);
            }
            self.pending.clear();
        }
    }
}

/// Parse a complete `go test -v` stream
///
/// # Errors
///
/// Returns `ParseError` on read failure or malformed output; no partial result
/// is returned.
pub fn parse_gotest(reader: impl BufRead, options: &ParseOptions) -> Result<Vec<Suite>, ParseError> {
    let mut parser = GoTestParser::new(options);
    for line in PrintableLines::new(reader) {
        parser.process_line(&line?)?;
    }
    debug!(lines = parser.lines_processed(), "Finished go test input");
    Ok(parser.finish())
}
