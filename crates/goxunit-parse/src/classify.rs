// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification
//!
//! Each protocol has a fixed, ordered set of patterns. Classification is a pure
//! function of one sanitized line; all state lives in the parsers.
//!
//! ```text
//! === RUN TestAdd                                    go test start
//! --- FAIL: TestSubFail (0.00 seconds)               go test end
//! ok      pkg/math        0.004s                     go test summary
//! START: mmath_test.go:16: MySuite.TestAdd           gocheck start
//! PASS: mmath_test.go:16: MySuite.TestAdd  0.000s    gocheck end
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern is valid")
}

static GT_START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^=== RUN:? (?P<name>[A-Za-z_][^[:space:]]*)"));
static GT_END: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^--- (?P<status>PASS|FAIL|SKIP): (?P<name>[A-Za-z_][^[:space:]]*) \((?P<time>[0-9]+(?:\.[0-9]+)?)")
});
static GT_SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<status>ok|FAIL)[ \t]+(?P<package>[^ \t]+)[ \t]+(?P<time>[0-9]+\.[0-9]+)")
});
static GT_NO_FILES: LazyLock<Regex> = LazyLock::new(|| compile(r"^\?.*\[no test files\]$"));
static GT_BUILD_FAILED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^FAIL.*\[(?:build|setup) failed\]$"));
static GT_EXIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^exit status -?[0-9]+"));

static GC_START: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"START: [^:]+:[^:]+: (?P<suite>[A-Za-z_][[:word:]]*)\.(?P<name>[A-Za-z_][[:word:]]*)")
});
static GC_END: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?P<status>PASS|FAIL|SKIP|MISS|PANIC): [^:]+:[^:]+: (?P<suite>[A-Za-z_][[:word:]]*)\.(?P<name>[A-Za-z_][[:word:]]*)(?:[[:space:]]+(?P<time>[0-9]+\.[0-9]+))?",
    )
});

static RACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^WARNING: DATA RACE"));

/// Error for an unrecognized status keyword
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status keyword: {0}")]
pub struct UnknownStatus(pub String);

/// Terminal status of a `go test` test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoTestStatus {
    Pass,
    Fail,
    Skip,
}

impl FromStr for GoTestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "SKIP" => Ok(Self::Skip),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Overall status on a `go test` package summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatus {
    Ok,
    Fail,
}

impl FromStr for SummaryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "FAIL" => Ok(Self::Fail),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Terminal status of a gocheck test
///
/// `Miss` means a fixture failed so the test never ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoCheckStatus {
    Pass,
    Fail,
    Skip,
    Miss,
    Panic,
}

impl FromStr for GoCheckStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "SKIP" => Ok(Self::Skip),
            "MISS" => Ok(Self::Miss),
            "PANIC" => Ok(Self::Panic),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A classified line of `go test -v` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoTestLine<'a> {
    /// `?  pkg  [no test files]`
    NoTestFiles,
    /// `FAIL  pkg [build failed]` or `[setup failed]`
    BuildFailed,
    /// `=== RUN TestName`
    Start {
        /// Test name
        name: &'a str,
    },
    /// `--- PASS: TestName (0.01s)`
    End {
        /// Reported status
        status: GoTestStatus,
        /// Test name
        name: &'a str,
        /// Elapsed seconds as printed
        time: &'a str,
    },
    /// `ok  pkg  0.01s`
    Summary {
        /// Package status
        status: SummaryStatus,
        /// Package import path
        package: &'a str,
        /// Elapsed seconds as printed
        time: &'a str,
    },
    /// Exit status and bare `PASS`/`FAIL` lines
    Noise,
    /// Anything else: output produced by a test
    Output,
}

/// A classified line of gocheck output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoCheckLine<'a> {
    /// `START: file.go:16: Suite.Test`
    Start {
        /// Suite type name
        suite: &'a str,
        /// Test method name
        name: &'a str,
    },
    /// `PASS: file.go:16: Suite.Test  0.000s`
    End {
        /// Reported status
        status: GoCheckStatus,
        /// Suite type name
        suite: &'a str,
        /// Test method name
        name: &'a str,
        /// Elapsed seconds, when printed
        time: Option<&'a str>,
    },
    /// Anything else
    Output,
}

// Patterns only match the keywords listed in the status enums.
fn keyword<T: FromStr>(s: &str) -> Option<T> {
    s.parse().ok()
}

/// Classify one line of `go test -v` output
#[must_use]
pub fn classify_gotest(line: &str) -> GoTestLine<'_> {
    if GT_NO_FILES.is_match(line) {
        return GoTestLine::NoTestFiles;
    }
    if GT_BUILD_FAILED.is_match(line) {
        return GoTestLine::BuildFailed;
    }
    if let Some(caps) = GT_START.captures(line) {
        if let Some(name) = caps.name("name") {
            return GoTestLine::Start {
                name: name.as_str(),
            };
        }
    }
    if let Some(caps) = GT_END.captures(line) {
        if let (Some(status), Some(name), Some(time)) = (
            caps.name("status").and_then(|m| keyword::<GoTestStatus>(m.as_str())),
            caps.name("name"),
            caps.name("time"),
        ) {
            return GoTestLine::End {
                status,
                name: name.as_str(),
                time: time.as_str(),
            };
        }
    }
    if let Some(caps) = GT_SUMMARY.captures(line) {
        if let (Some(status), Some(package), Some(time)) = (
            caps.name("status").and_then(|m| keyword::<SummaryStatus>(m.as_str())),
            caps.name("package"),
            caps.name("time"),
        ) {
            return GoTestLine::Summary {
                status,
                package: package.as_str(),
                time: time.as_str(),
            };
        }
    }
    if GT_EXIT.is_match(line) || line == "FAIL" || line == "PASS" {
        return GoTestLine::Noise;
    }
    GoTestLine::Output
}

/// Classify one line of gocheck output
#[must_use]
pub fn classify_gocheck(line: &str) -> GoCheckLine<'_> {
    if let Some(caps) = GC_START.captures(line) {
        if let (Some(suite), Some(name)) = (caps.name("suite"), caps.name("name")) {
            return GoCheckLine::Start {
                suite: suite.as_str(),
                name: name.as_str(),
            };
        }
    }
    if let Some(caps) = GC_END.captures(line) {
        if let (Some(status), Some(suite), Some(name)) = (
            caps.name("status").and_then(|m| keyword::<GoCheckStatus>(m.as_str())),
            caps.name("suite"),
            caps.name("name"),
        ) {
            return GoCheckLine::End {
                status,
                suite: suite.as_str(),
                name: name.as_str(),
                time: caps.name("time").map(|m| m.as_str().trim()),
            };
        }
    }
    GoCheckLine::Output
}

/// Whether the line opens a data race report from the race detector
#[must_use]
pub fn is_race_warning(line: &str) -> bool {
    RACE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_gotest_start() {
        assert_eq!(classify_gotest("=== RUN TestAdd"), GoTestLine::Start { name: "TestAdd" });
        assert_eq!(classify_gotest("=== RUN: TestOld"), GoTestLine::Start { name: "TestOld" });
        assert_eq!(
            classify_gotest("=== RUN TestSub/case_1"),
            GoTestLine::Start {
                name: "TestSub/case_1"
            }
        );
    }

    #[test]
    fn test_gotest_start_requires_identifier() {
        assert_eq!(classify_gotest("=== RUN 1Test"), GoTestLine::Output);
        assert_eq!(classify_gotest("  === RUN TestAdd"), GoTestLine::Output);
    }

    #[test]
    fn test_gotest_end_variants() {
        assert_eq!(
            classify_gotest("--- PASS: TestSub (0.00 seconds)"),
            GoTestLine::End {
                status: GoTestStatus::Pass,
                name: "TestSub",
                time: "0.00"
            }
        );
        assert_eq!(
            classify_gotest("--- FAIL: TestSubFail (1.25s)"),
            GoTestLine::End {
                status: GoTestStatus::Fail,
                name: "TestSubFail",
                time: "1.25"
            }
        );
        assert_eq!(
            classify_gotest("--- SKIP: TestSkip (3s)"),
            GoTestLine::End {
                status: GoTestStatus::Skip,
                name: "TestSkip",
                time: "3"
            }
        );
    }

    #[test]
    fn test_gotest_times_are_ascii_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert_eq!(classify_gotest("--- PASS: TestA (\u{663}s)"), GoTestLine::Output);
        assert_eq!(classify_gotest("ok  pkg  \u{663}.\u{663}s"), GoTestLine::Output);
    }

    #[test]
    fn test_gotest_nested_end_is_output() {
        assert_eq!(classify_gotest("    --- PASS: TestSub/a (0.00s)"), GoTestLine::Output);
    }

    #[test]
    fn test_gotest_summary() {
        assert_eq!(
            classify_gotest("ok  \tpkg/math\t0.004s"),
            GoTestLine::Summary {
                status: SummaryStatus::Ok,
                package: "pkg/math",
                time: "0.004"
            }
        );
        assert_eq!(
            classify_gotest("FAIL\t_/home/miki/xunit\t0.004s"),
            GoTestLine::Summary {
                status: SummaryStatus::Fail,
                package: "_/home/miki/xunit",
                time: "0.004"
            }
        );
    }

    #[test]
    fn test_gotest_skip_and_fatal_lines() {
        assert_eq!(classify_gotest("?   \talipay\t[no test files]"), GoTestLine::NoTestFiles);
        assert_eq!(classify_gotest("FAIL    node/config [build failed]"), GoTestLine::BuildFailed);
        assert_eq!(classify_gotest("FAIL\tnode/db [setup failed]"), GoTestLine::BuildFailed);
    }

    #[test]
    fn test_gotest_noise() {
        assert_eq!(classify_gotest("exit status 1"), GoTestLine::Noise);
        assert_eq!(classify_gotest("exit status -1"), GoTestLine::Noise);
        assert_eq!(classify_gotest("FAIL"), GoTestLine::Noise);
        assert_eq!(classify_gotest("PASS"), GoTestLine::Noise);
        assert_eq!(classify_gotest("PASS "), GoTestLine::Output);
        assert_eq!(classify_gotest("\tmmath_test.go:12: oops"), GoTestLine::Output);
    }

    #[test]
    fn test_gocheck_start() {
        assert_eq!(
            classify_gocheck("START: mmath_test.go:16: MySuite.TestAdd"),
            GoCheckLine::Start {
                suite: "MySuite",
                name: "TestAdd"
            }
        );
    }

    #[test]
    fn test_gocheck_end_with_and_without_time() {
        assert_eq!(
            classify_gocheck("PASS: mmath_test.go:16: MySuite.TestAdd\t0.000s"),
            GoCheckLine::End {
                status: GoCheckStatus::Pass,
                suite: "MySuite",
                name: "TestAdd",
                time: Some("0.000")
            }
        );
        assert_eq!(
            classify_gocheck("FAIL: mmath_test.go:35: MySuite.TestDiv"),
            GoCheckLine::End {
                status: GoCheckStatus::Fail,
                suite: "MySuite",
                name: "TestDiv",
                time: None
            }
        );
    }

    #[test]
    fn test_gocheck_all_statuses() {
        for (kw, status) in [
            ("SKIP", GoCheckStatus::Skip),
            ("MISS", GoCheckStatus::Miss),
            ("PANIC", GoCheckStatus::Panic),
        ] {
            let line = format!("{kw}: a_test.go:1: S.T");
            assert_eq!(
                classify_gocheck(&line),
                GoCheckLine::End {
                    status,
                    suite: "S",
                    name: "T",
                    time: None
                }
            );
        }
    }

    #[test]
    fn test_gocheck_output() {
        assert_eq!(classify_gocheck("mmath_test.go:38:"), GoCheckLine::Output);
        assert_eq!(classify_gocheck("    c.Assert(x, Equals, 1)"), GoCheckLine::Output);
        assert_eq!(classify_gocheck("OK: 3 passed"), GoCheckLine::Output);
    }

    #[test]
    fn test_race_warning() {
        assert!(is_race_warning("WARNING: DATA RACE"));
        assert!(!is_race_warning("  WARNING: DATA RACE"));
        assert!(!is_race_warning("Found 1 data race(s)"));
    }

    #[test]
    fn test_status_keywords() {
        assert_eq!("MISS".parse::<GoCheckStatus>(), Ok(GoCheckStatus::Miss));
        assert_eq!("ok".parse::<SummaryStatus>(), Ok(SummaryStatus::Ok));
        let err = "pass".parse::<GoTestStatus>().expect_err("lowercase is not a status");
        assert_eq!(err.to_string(), "unknown status keyword: pass");
    }
}
