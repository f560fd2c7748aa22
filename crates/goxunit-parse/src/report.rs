//! Report model: suites of tests

use serde::{Deserialize, Serialize};

/// One executed test case
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Test {
    /// Test name
    pub name: String,
    /// Elapsed seconds as printed, or `N/A`
    pub time: String,
    /// Output captured while the test ran
    pub message: String,
    /// Test failed (or raced with race detection enabled)
    pub failed: bool,
    /// Test was skipped
    pub skipped: bool,
    /// Test could not run
    pub errored: bool,
}

impl Test {
    /// Create an open test with no outcome yet
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn append_message(&mut self, text: &str) {
        if self.message.is_empty() {
            self.message = text.to_string();
        } else {
            self.message.push('\n');
            self.message.push_str(text);
        }
    }
}

/// A named group of tests
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suite {
    /// Package path or gocheck suite type
    pub name: String,
    /// Wall time from the package summary line
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<String>,
    /// Tests in completion order
    pub tests: Vec<Test>,
}

impl Suite {
    /// Create an empty suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Number of tests
    #[must_use]
    pub fn count(&self) -> usize {
        self.tests.len()
    }

    /// Number of failed tests
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.failed).count()
    }

    /// Number of errored tests
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.tests.iter().filter(|t| t.errored).count()
    }

    /// Number of skipped tests
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.tests.iter().filter(|t| t.skipped).count()
    }

    /// Attach trailing output to the most recently completed test, if any
    pub(crate) fn append_to_last(&mut self, text: &str) {
        if let Some(test) = self.tests.last_mut() {
            test.append_message(text);
        }
    }
}

/// Aggregate counts over a whole report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Tests run
    pub tests: usize,
    /// Tests failed
    pub failures: usize,
    /// Tests errored
    pub errors: usize,
    /// Tests skipped
    pub skipped: usize,
}

/// Everything the renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    /// Sealed suites in output order
    pub suites: Vec<Suite>,
    /// Wrap suites in a `testsuites` element
    pub multi: bool,
}

impl Report {
    /// Build a report; `force_multi` wraps even a single suite
    #[must_use]
    pub fn new(suites: Vec<Suite>, force_multi: bool) -> Self {
        let multi = force_multi || suites.len() > 1;
        Self { suites, multi }
    }

    /// Whether no suite was parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Whether any test in any suite failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.suites.iter().any(|s| s.failed_count() > 0)
    }

    /// Counts summed over all suites
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.suites.iter().fold(Totals::default(), |acc, s| Totals {
            tests: acc.tests + s.count(),
            failures: acc.failures + s.failed_count(),
            errors: acc.errors + s.error_count(),
            skipped: acc.skipped + s.skipped_count(),
        })
    }
}
