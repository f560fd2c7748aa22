// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gocheck (`go test -gocheck.vv`) output parsing
//!
//! Every test is bracketed by a `START:` and an end line naming
//! `Suite.Test`. There is no suite summary: a suite is whatever tests were
//! reported under its name by the time the input ends, and its tests may be
//! spread over non-contiguous parts of the input.
//!
//! Fixture methods (`SetUpTest`, `TearDownTest`) are reported with the same
//! markers nested inside the test they wrap and are skipped entirely.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, warn};

use crate::UNTERMINATED_TIME;
use crate::classify::{GoCheckLine, GoCheckStatus, classify_gocheck, is_race_warning};
use crate::error::ParseError;
use crate::lines::PrintableLines;
use crate::options::{IgnoredTests, ParseOptions, Unterminated};
use crate::report::{Suite, Test};

/// Suites in the order their first test completed, with lookup by name
#[derive(Debug, Default)]
struct SuiteIndex {
    suites: Vec<Suite>,
    positions: HashMap<String, usize>,
}

impl SuiteIndex {
    fn push(&mut self, suite_name: String, test: Test) {
        let idx = match self.positions.get(&suite_name) {
            Some(&idx) => idx,
            None => {
                let idx = self.suites.len();
                self.suites.push(Suite::new(suite_name.clone()));
                self.positions.insert(suite_name, idx);
                idx
            }
        };
        self.suites[idx].tests.push(test);
    }

    fn into_vec(self) -> Vec<Suite> {
        self.suites
    }
}

#[derive(Debug)]
struct OpenTest {
    suite: String,
    test: Test,
}

impl OpenTest {
    fn qualified_name(&self) -> String {
        format!("{}.{}", self.suite, self.test.name)
    }
}

/// Line-at-a-time state machine for gocheck output
#[derive(Debug)]
pub struct GoCheckParser {
    ignored: IgnoredTests,
    race_as_failure: bool,
    unterminated: Unterminated,
    line: usize,
    suites: SuiteIndex,
    current: Option<OpenTest>,
    pending: Vec<String>,
    found_race: bool,
}

impl GoCheckParser {
    /// Create a parser; unterminated tests are dropped unless overridden
    #[must_use]
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            ignored: options.ignored_tests.clone(),
            race_as_failure: options.race_as_failure,
            unterminated: options.unterminated_or(Unterminated::Drop),
            line: 0,
            suites: SuiteIndex::default(),
            current: None,
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
    /// Returns `ParseError` when a test starts while another is open, or an
    /// end marker has no open test or names a different one.
    pub fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;
        let classified = classify_gocheck(line);

        if !matches!(classified, GoCheckLine::Start { .. })
            && self.race_as_failure
            && is_race_warning(line)
        {
            self.found_race = true;
        }

        match classified {
            GoCheckLine::Start { suite, name } => {
                if self.ignored.contains(name) {
                    return Ok(());
                }
                if let Some(open) = &self.current {
                    return Err(ParseError::StartInMiddle {
                        line: self.line,
                        open: open.qualified_name(),
                        started: format!("{suite}.{name}"),
                    });
                }
                self.current = Some(OpenTest {
                    suite: suite.to_string(),
                    test: Test::new(name),
                });
                self.pending.clear();
                self.found_race = false;
            }
            GoCheckLine::End {
                status,
                suite,
                name,
                time,
            } => {
                if self.ignored.contains(name) {
                    return Ok(());
                }
                let Some(open) = self.current.take() else {
                    return Err(ParseError::OrphanEnd {
                        line: self.line,
                        text: line.to_string(),
                    });
                };
                if open.suite != suite || open.test.name != name {
                    return Err(ParseError::NameMismatch {
                        line: self.line,
                        found: format!("{suite}.{name}"),
                        expected: open.qualified_name(),
                    });
                }

                let OpenTest {
                    suite: suite_name,
                    mut test,
                } = open;
                test.message = self.pending.join("\n");
                test.time = time.unwrap_or_default().to_string();
                test.failed = matches!(status, GoCheckStatus::Fail | GoCheckStatus::Panic)
                    || self.found_race;
                test.errored = status == GoCheckStatus::Miss;
                test.skipped = status == GoCheckStatus::Skip;
                self.pending.clear();

                debug!(suite = %suite_name, test = %test.name, ?status, "Test finished");
                self.suites.push(suite_name, test);
            }
            GoCheckLine::Output => {
                if self.current.is_some() {
                    self.pending.push(line.to_string());
                }
            }
        }

        Ok(())
    }

    /// Return the suites in first-completion order
    #[must_use]
    pub fn finish(mut self) -> Vec<Suite> {
        if let Some(open) = self.current.take() {
            match self.unterminated {
                Unterminated::Fail => {
                    debug!(test = %open.qualified_name(), "Input ended inside a test; marking failed");
                    let OpenTest { suite, mut test } = open;
                    test.failed = true;
                    test.time = UNTERMINATED_TIME.to_string();
                    test.message = self.pending.join("\n");
                    self.suites.push(suite, test);
                }
                Unterminated::Drop => {
                    warn!(test = %open.qualified_name(), "Input ended inside a test; dropping it");
                }
            }
        }
        self.suites.into_vec()
    }
}

/// Parse a complete gocheck stream
///
/// # Errors
///
/// Returns `ParseError` on read failure or malformed output; no partial result
/// is returned.
pub fn parse_gocheck(reader: impl BufRead, options: &ParseOptions) -> Result<Vec<Suite>, ParseError> {
    let mut parser = GoCheckParser::new(options);
    for line in PrintableLines::new(reader) {
        parser.process_line(&line?)?;
    }
    debug!(lines = parser.lines_processed(), "Finished gocheck input");
    Ok(parser.finish())
}
