// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Shared helpers for goxunit integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEST_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A temporary directory removed on drop
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new temporary test directory
    ///
    /// The directory is created under the system temp directory with a
    /// unique name based on the test name and a counter.
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "goxunit-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&path).expect("Failed to create temp test directory");
        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file inside the directory and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// go test output for two packages, one failing
pub fn sample_gotest_output() -> &'static str {
    "=== RUN TestParse
--- PASS: TestParse (0.01s)
PASS
ok  \tgithub.com/acme/tool/parse\t0.015s
=== RUN TestStore
    store_test.go:41: connection refused
--- FAIL: TestStore (0.12s)
FAIL
exit status 1
FAIL\tgithub.com/acme/tool/store\t0.130s
"
}

/// go test output for one passing package
pub fn passing_gotest_output() -> &'static str {
    "=== RUN TestAdd\n--- PASS: TestAdd (0.01)\nok  pkg/math  0.01\n"
}

/// gocheck output with a fixture and a failure
pub fn sample_gocheck_output() -> &'static str {
    "START: mmath_test.go:16: MySuite.TestAdd
START: mmath_test.go:10: MySuite.SetUpTest
PASS: mmath_test.go:10: MySuite.SetUpTest\t0.000s
PASS: mmath_test.go:16: MySuite.TestAdd\t0.000s
START: mmath_test.go:35: MySuite.TestDiv
... obtained int = 1
FAIL: mmath_test.go:35: MySuite.TestDiv
"
}
