// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Parser configuration

use std::collections::HashSet;

/// Fixture methods gocheck reports like tests
pub const DEFAULT_IGNORED_TESTS: [&str; 2] = ["SetUpTest", "TearDownTest"];

/// What to do with a test whose end marker never arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    /// Record it as failed with time `N/A`
    Fail,
    /// Discard it
    Drop,
}

/// Test names that never produce a test record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredTests {
    names: HashSet<String>,
}

impl IgnoredTests {
    /// An empty set: every test name is recorded
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Add a name to the set
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Whether the name is ignored
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for IgnoredTests {
    fn default() -> Self {
        DEFAULT_IGNORED_TESTS.iter().map(|s| (*s).to_string()).collect()
    }
}

impl FromIterator<String> for IgnoredTests {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for IgnoredTests {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

/// Options shared by both parsers
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Mark a test failed when a data race warning appears in its output
    pub race_as_failure: bool,
    /// Names skipped by the gocheck parser
    pub ignored_tests: IgnoredTests,
    /// Policy for unterminated tests; `None` keeps each protocol's default
    pub unterminated: Option<Unterminated>,
}

impl ParseOptions {
    /// Treat data races as failures
    #[must_use]
    pub fn with_race_as_failure(mut self, race: bool) -> Self {
        self.race_as_failure = race;
        self
    }

    /// Replace the ignored test names
    #[must_use]
    pub fn with_ignored_tests(mut self, ignored: IgnoredTests) -> Self {
        self.ignored_tests = ignored;
        self
    }

    /// Override the unterminated test policy
    #[must_use]
    pub fn with_unterminated(mut self, policy: Unterminated) -> Self {
        self.unterminated = Some(policy);
        self
    }

    /// Resolve the policy against a protocol default
    #[must_use]
    pub fn unterminated_or(&self, default: Unterminated) -> Unterminated {
        self.unterminated.unwrap_or(default)
    }
}
