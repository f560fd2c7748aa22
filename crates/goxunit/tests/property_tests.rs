// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for the conversion pipeline
//!
//! Arbitrary input must either convert or fail cleanly, and the `--fail`
//! outcome must agree with the failures visible in the rendered report.

use std::io;

use proptest::prelude::*;

use goxunit::app::{RunOutcome, convert, parse_report};
use goxunit::config::Config;

/// Lines drawn from both protocols plus free text
fn console_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "Test[A-Z][a-z]{0,6}".prop_map(|n| format!("=== RUN {n}")),
        ("(PASS|FAIL|SKIP)", "Test[A-Z][a-z]{0,6}")
            .prop_map(|(s, n)| format!("--- {s}: {n} (0.01s)")),
        "[a-z]{1,6}".prop_map(|p| format!("ok  \t{p}\t0.010s")),
        "[a-z]{1,6}".prop_map(|p| format!("FAIL\t{p}\t0.010s")),
        Just("WARNING: DATA RACE".to_string()),
        Just("exit status 1".to_string()),
        ".{0,40}",
    ]
}

proptest! {
    #[test]
    fn convert_never_panics(lines in prop::collection::vec(console_line(), 0..30), gocheck: bool, race: bool) {
        let input = lines.join("\n");
        let config = Config { gocheck, race, fail: true, ..Default::default() };
        let _ = convert(input.as_bytes(), io::sink(), &config);
    }

    #[test]
    fn fail_outcome_matches_report(lines in prop::collection::vec(console_line(), 0..30)) {
        let input = lines.join("\n");
        let config = Config { fail: true, ..Default::default() };

        let mut xml = Vec::new();
        if let Ok(outcome) = convert(input.as_bytes(), &mut xml, &config) {
            let report = parse_report(input.as_bytes(), &config).expect("same input parses again");
            let xml = String::from_utf8(xml).expect("utf-8");
            prop_assert_eq!(outcome == RunOutcome::Failures, report.has_failures());
            prop_assert_eq!(report.has_failures(), xml.contains("<failure "));
        }
    }
}
