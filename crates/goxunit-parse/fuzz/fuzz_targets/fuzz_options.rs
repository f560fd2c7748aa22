// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target combining parser options with arbitrary input
//!
//! Every combination of race detection, unterminated-test policy and protocol
//! must handle any input without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use goxunit_parse::{ParseOptions, Parser, Unterminated};

#[derive(Debug, Arbitrary)]
struct Input {
    gocheck: bool,
    race: bool,
    policy: Option<bool>,
    extra_ignored: Vec<String>,
    text: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mut options = ParseOptions::default().with_race_as_failure(input.race);
    options.ignored_tests.extend(input.extra_ignored);
    if let Some(fail) = input.policy {
        options = options.with_unterminated(if fail { Unterminated::Fail } else { Unterminated::Drop });
    }

    let parser = if input.gocheck { Parser::GoCheck } else { Parser::GoTest };
    let _ = parser.parse(input.text.as_slice(), &options);
});
